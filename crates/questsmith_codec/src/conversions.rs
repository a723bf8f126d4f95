//! Conversions between graph types and document records.

use crate::dto::{ChoiceRecord, MetaRecord, NodeRecord, ProjectDocument};
use questsmith_core::{Choice, Node, QuestGraph, QuestMeta};

impl From<&QuestMeta> for MetaRecord {
    fn from(meta: &QuestMeta) -> Self {
        Self {
            quest_name: meta.quest_name().clone(),
            region: meta.region().clone(),
            short_description: meta.short_description().clone(),
            quest_giver: meta.quest_giver().clone(),
            prerequisite: meta.prerequisite().clone(),
            quest_type: meta.quest_type().clone(),
            meta_short: meta.meta_short().clone(),
            rewards: meta.rewards().clone(),
            important_flags: meta.important_flags().clone(),
            version_stamp: meta.version_stamp().clone(),
        }
    }
}

impl From<MetaRecord> for QuestMeta {
    fn from(record: MetaRecord) -> Self {
        QuestMeta::empty()
            .with_quest_name(record.quest_name)
            .with_region(record.region)
            .with_short_description(record.short_description)
            .with_quest_giver(record.quest_giver)
            .with_prerequisite(record.prerequisite)
            .with_quest_type(record.quest_type)
            .with_meta_short(record.meta_short)
            .with_rewards(record.rewards)
            .with_important_flags(record.important_flags)
            .with_version_stamp(record.version_stamp)
    }
}

impl From<&Node> for NodeRecord {
    fn from(node: &Node) -> Self {
        Self {
            id: node.id().clone(),
            title: node.title().clone(),
            scene: node.scene().clone(),
            dialog: node.dialog().clone(),
            content: node.content().clone(),
            info_items: node.info_items().clone(),
            tech_flags: node.tech_flags().clone(),
            outcomes: node.outcomes().clone(),
            notes: node.notes().clone(),
            choices: node
                .choices()
                .iter()
                .map(|choice| ChoiceRecord {
                    label: choice.label().clone(),
                    target: choice.target().clone(),
                })
                .collect(),
        }
    }
}

impl From<NodeRecord> for Node {
    fn from(record: NodeRecord) -> Self {
        let choices = record
            .choices
            .into_iter()
            .map(|choice| Choice::new(choice.label, choice.target))
            .collect();

        let mut node = Node::new(&record.id, record.title).with_choices(choices);
        node.set_scene(record.scene)
            .set_dialog(record.dialog)
            .set_content(record.content)
            .set_info_items(record.info_items)
            .set_tech_flags(record.tech_flags)
            .set_outcomes(record.outcomes)
            .set_notes(record.notes);
        node
    }
}

impl From<&QuestGraph> for ProjectDocument {
    fn from(graph: &QuestGraph) -> Self {
        Self {
            meta: MetaRecord::from(graph.meta()),
            nodes: graph.nodes().iter().map(NodeRecord::from).collect(),
        }
    }
}

impl From<ProjectDocument> for QuestGraph {
    fn from(document: ProjectDocument) -> Self {
        let nodes = document.nodes.into_iter().map(Node::from).collect();
        QuestGraph::from_parts(document.meta.into(), nodes)
    }
}
