//! Gradient-boosted tree ensemble regressor.
//!
//! The serialized layout is a flattened-node export of the trained booster:
//! each tree is a node array, node 0 is the root, split nodes reference
//! children by index, and prediction is `base_score + Σ leaf(tree, x)`.

use serde::{Deserialize, Serialize};

use super::Regressor;
use crate::error::{ModelerError, Result};

/// One node of a flattened decision tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: f64,
    },
}

/// A single decision tree in flattened-node form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tree {
    pub nodes: Vec<TreeNode>,
}

impl Tree {
    /// Walk the tree for one input, returning the leaf value.
    ///
    /// `x <= threshold` goes left; NaN fails the comparison and goes right,
    /// matching the booster's default direction for missing values.
    fn evaluate(&self, input: &[f64]) -> Result<f64> {
        let mut index = 0;
        // A well-formed tree terminates within nodes.len() steps; the bound
        // also catches cycles in a corrupt artifact.
        for _ in 0..self.nodes.len() {
            match self.nodes.get(index) {
                Some(TreeNode::Leaf { value }) => return Ok(*value),
                Some(TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    let x = *input.get(*feature).ok_or_else(|| {
                        ModelerError::prediction(format!(
                            "split references feature {} beyond input length {}",
                            feature,
                            input.len()
                        ))
                    })?;
                    index = if x <= *threshold { *left } else { *right };
                }
                None => {
                    return Err(ModelerError::prediction(format!(
                        "split references node {} beyond tree size {}",
                        index,
                        self.nodes.len()
                    )))
                }
            }
        }
        Err(ModelerError::prediction("cycle detected in tree traversal"))
    }
}

/// Fitted gradient-boosted regression ensemble.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GbdtModel {
    num_features: usize,
    base_score: f64,
    trees: Vec<Tree>,
}

impl GbdtModel {
    pub fn new(num_features: usize, base_score: f64, trees: Vec<Tree>) -> Result<Self> {
        let model = Self {
            num_features,
            base_score,
            trees,
        };
        model.check_consistency()?;
        Ok(model)
    }

    pub fn num_trees(&self) -> usize {
        self.trees.len()
    }

    pub fn num_features(&self) -> usize {
        self.num_features
    }

    /// Verify every split references a valid feature and child node.
    pub(crate) fn check_consistency(&self) -> Result<()> {
        if self.num_features == 0 {
            return Err(ModelerError::artifact("model", "fitted on zero features"));
        }
        for (t, tree) in self.trees.iter().enumerate() {
            if tree.nodes.is_empty() {
                return Err(ModelerError::artifact("model", format!("tree {} is empty", t)));
            }
            for node in &tree.nodes {
                if let TreeNode::Split {
                    feature,
                    left,
                    right,
                    ..
                } = node
                {
                    if *feature >= self.num_features {
                        return Err(ModelerError::artifact(
                            "model",
                            format!(
                                "tree {} splits on feature {} but model has {}",
                                t, feature, self.num_features
                            ),
                        ));
                    }
                    if *left >= tree.nodes.len() || *right >= tree.nodes.len() {
                        return Err(ModelerError::artifact(
                            "model",
                            format!("tree {} has a child index out of bounds", t),
                        ));
                    }
                }
            }
        }
        Ok(())
    }
}

impl Regressor for GbdtModel {
    fn predict(&self, input: &[f64]) -> Result<f64> {
        if input.len() != self.num_features {
            return Err(ModelerError::prediction(format!(
                "model fitted on {} features, got {}",
                self.num_features,
                input.len()
            )));
        }

        let mut prediction = self.base_score;
        for tree in &self.trees {
            prediction += tree.evaluate(input)?;
        }
        Ok(prediction)
    }
}
