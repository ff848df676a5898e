//! Regression forest evaluated from a flattened tree export

use serde::Deserialize;

use crate::domain::{DomainError, FeatureVector, Predictor, FEATURE_COUNT};

/// One node of a flattened decision tree
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    /// Samples with `x[feature] <= threshold` go to `left`
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

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<TreeNode>,
}

impl DecisionTree {
    /// Check that every split points forward to an existing node and reads
    /// an existing feature, which also rules out cycles
    pub fn check(&self) -> Result<(), String> {
        if self.nodes.is_empty() {
            return Err("tree has no nodes".to_string());
        }

        for (index, node) in self.nodes.iter().enumerate() {
            match node {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if *feature >= FEATURE_COUNT {
                        return Err(format!(
                            "node {} splits on feature {} but only {} features exist",
                            index, feature, FEATURE_COUNT
                        ));
                    }
                    if !threshold.is_finite() {
                        return Err(format!("node {} has a non-finite threshold", index));
                    }
                    for child in [*left, *right] {
                        if child <= index || child >= self.nodes.len() {
                            return Err(format!(
                                "node {} has invalid child index {}",
                                index, child
                            ));
                        }
                    }
                }
                TreeNode::Leaf { value } => {
                    if !value.is_finite() {
                        return Err(format!("leaf {} has a non-finite value", index));
                    }
                }
            }
        }

        Ok(())
    }

    /// Walk from the root to a leaf
    pub fn evaluate(&self, features: &[f64]) -> Result<f64, DomainError> {
        let mut index = 0;

        loop {
            match self.nodes.get(index) {
                Some(TreeNode::Leaf { value }) => return Ok(*value),
                Some(TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    let x = features
                        .get(*feature)
                        .ok_or_else(|| DomainError::feature_mismatch(*feature + 1, features.len()))?;
                    let next = if *x <= *threshold { *left } else { *right };

                    if next <= index {
                        return Err(DomainError::prediction(format!(
                            "node {} points backwards to {}",
                            index, next
                        )));
                    }
                    index = next;
                }
                None => {
                    return Err(DomainError::prediction(format!(
                        "node {} does not exist",
                        index
                    )));
                }
            }
        }
    }
}

/// Forest of regression trees; the prediction is the mean of the trees
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RandomForestRegressor {
    pub feature_names: Vec<String>,
    pub trees: Vec<DecisionTree>,
}

impl RandomForestRegressor {
    pub fn check(&self) -> Result<(), String> {
        if self.trees.is_empty() {
            return Err("forest has no trees".to_string());
        }

        for (index, tree) in self.trees.iter().enumerate() {
            tree.check().map_err(|e| format!("tree {}: {}", index, e))?;
        }

        Ok(())
    }

    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }
}

impl Predictor for RandomForestRegressor {
    fn predict(&self, features: &FeatureVector) -> Result<f64, DomainError> {
        if self.trees.is_empty() {
            return Err(DomainError::prediction("forest has no trees"));
        }

        let values = features.as_slice();
        let mut sum = 0.0;
        for tree in &self.trees {
            sum += tree.evaluate(values)?;
        }

        Ok(sum / self.trees.len() as f64)
    }

    fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    fn kind(&self) -> &'static str {
        "random_forest"
    }
}
