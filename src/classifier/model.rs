//! Decision-tree ensemble loaded from a JSON model artifact
//!
//! The artifact holds one binary decision tree per nutrient in
//! [Nitrogen, Phosphorus, Potassium] order. Split nodes reference child
//! nodes by index; child indices must be strictly greater than the parent
//! index, which makes every tree acyclic by construction and bounds a
//! traversal at `nodes.len()` steps.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::{ClassifierError, NutrientClassifier};
use crate::types::{FeatureVector, Nutrient, PredictionVector, FEATURE_COUNT};

/// Artifact header fields, surfaced on the health endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub name: String,
    pub version: String,
    /// Feature column names in row order; checked against the encoder contract.
    pub feature_names: Vec<String>,
    /// Output labels in column order; checked against [`Nutrient::ALL`].
    pub outputs: Vec<String>,
}

/// One node of a binary decision tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        leaf: u8,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DecisionTree {
    nodes: Vec<TreeNode>,
}

impl DecisionTree {
    /// Walk from the root to a leaf. Indices were validated at load time,
    /// so the walk always terminates within `nodes.len()` steps.
    fn evaluate(&self, features: &FeatureVector) -> Result<u8, ClassifierError> {
        let mut index = 0usize;
        for _ in 0..self.nodes.len() {
            match self.nodes.get(index) {
                Some(TreeNode::Leaf { leaf }) => return Ok(*leaf),
                Some(TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    let value = features.feature(*feature).ok_or_else(|| {
                        ClassifierError::Inference(format!("feature index {feature} out of range"))
                    })?;
                    index = if value <= *threshold { *left } else { *right };
                }
                None => {
                    return Err(ClassifierError::Inference(format!(
                        "node index {index} out of range"
                    )))
                }
            }
        }
        Err(ClassifierError::Inference(
            "tree traversal did not reach a leaf".to_string(),
        ))
    }
}

/// On-disk artifact shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ModelArtifact {
    #[serde(flatten)]
    metadata: ModelMetadata,
    /// One tree per output, in output column order.
    trees: Vec<DecisionTree>,
}

/// Pre-trained tree ensemble: one binary decision tree per nutrient.
#[derive(Debug, Clone)]
pub struct TreeEnsembleModel {
    metadata: ModelMetadata,
    trees: Vec<DecisionTree>,
}

impl TreeEnsembleModel {
    /// Load and validate a model artifact.
    ///
    /// A missing or malformed artifact is a fatal startup condition for the
    /// application — callers propagate the error rather than degrading.
    pub fn load_from_file(path: &Path) -> Result<Self, ClassifierError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ClassifierError::Io(path.to_path_buf(), e))?;
        let artifact: ModelArtifact = serde_json::from_str(&contents)
            .map_err(|e| ClassifierError::Parse(path.to_path_buf(), e))?;

        let model = Self::from_artifact(artifact)?;
        info!(
            model = %model.metadata.name,
            version = %model.metadata.version,
            path = %path.display(),
            "Loaded nutrient model artifact"
        );
        Ok(model)
    }

    fn from_artifact(artifact: ModelArtifact) -> Result<Self, ClassifierError> {
        let ModelArtifact { metadata, trees } = artifact;

        if metadata.feature_names.len() != FEATURE_COUNT {
            return Err(ClassifierError::Schema(format!(
                "expected {FEATURE_COUNT} feature names, artifact has {}",
                metadata.feature_names.len()
            )));
        }
        if metadata.outputs.len() != Nutrient::ALL.len() {
            return Err(ClassifierError::Schema(format!(
                "expected {} outputs, artifact has {}",
                Nutrient::ALL.len(),
                metadata.outputs.len()
            )));
        }
        for (column, nutrient) in metadata.outputs.iter().zip(Nutrient::ALL) {
            if column != nutrient.as_str() {
                return Err(ClassifierError::Schema(format!(
                    "output column '{column}' does not match expected '{nutrient}'"
                )));
            }
        }
        if trees.len() != Nutrient::ALL.len() {
            return Err(ClassifierError::Schema(format!(
                "expected {} trees, artifact has {}",
                Nutrient::ALL.len(),
                trees.len()
            )));
        }
        for (tree_index, tree) in trees.iter().enumerate() {
            Self::validate_tree(tree_index, tree)?;
        }

        Ok(Self { metadata, trees })
    }

    fn validate_tree(tree_index: usize, tree: &DecisionTree) -> Result<(), ClassifierError> {
        if tree.nodes.is_empty() {
            return Err(ClassifierError::Schema(format!(
                "tree {tree_index} has no nodes"
            )));
        }
        for (node_index, node) in tree.nodes.iter().enumerate() {
            match node {
                TreeNode::Leaf { leaf } => {
                    if *leaf > 1 {
                        return Err(ClassifierError::Schema(format!(
                            "tree {tree_index} node {node_index}: leaf value {leaf} is not a binary flag"
                        )));
                    }
                }
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if *feature >= FEATURE_COUNT {
                        return Err(ClassifierError::Schema(format!(
                            "tree {tree_index} node {node_index}: feature index {feature} out of range"
                        )));
                    }
                    if !threshold.is_finite() {
                        return Err(ClassifierError::Schema(format!(
                            "tree {tree_index} node {node_index}: threshold is not finite"
                        )));
                    }
                    for (side, child) in [("left", *left), ("right", *right)] {
                        if child <= node_index || child >= tree.nodes.len() {
                            return Err(ClassifierError::Schema(format!(
                                "tree {tree_index} node {node_index}: {side} child {child} must point forward within the tree"
                            )));
                        }
                    }
                }
            }
        }
        Ok(())
    }

    pub const fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }
}

impl NutrientClassifier for TreeEnsembleModel {
    fn predict(&self, features: &FeatureVector) -> Result<PredictionVector, ClassifierError> {
        let mut flags = [0u8; 3];
        for (flag, tree) in flags.iter_mut().zip(&self.trees) {
            *flag = tree.evaluate(features)?;
        }
        Ok(PredictionVector::from_flags(flags))
    }

    fn describe(&self) -> &str {
        &self.metadata.name
    }
}
