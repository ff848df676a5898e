use std::fmt::Debug;

use async_trait::async_trait;
use serde_json::Value;

/// Animation descriptor (Lottie JSON) handed to the page unchanged
#[derive(Debug, Clone, PartialEq)]
pub struct Animation(Value);

impl Animation {
    pub fn new(document: Value) -> Self {
        Self(document)
    }

    pub fn document(&self) -> &Value {
        &self.0
    }

    pub fn into_document(self) -> Value {
        self.0
    }
}

/// Source of the decorative animation.
///
/// Implementations never fail: any problem yields `None` and the page renders
/// an empty animation area.
#[async_trait]
pub trait AnimationSource: Send + Sync + Debug {
    async fn fetch(&self) -> Option<Animation>;
}

/// Animation source used when the animation is switched off
#[derive(Debug, Clone, Default)]
pub struct DisabledAnimation;

#[async_trait]
impl AnimationSource for DisabledAnimation {
    async fn fetch(&self) -> Option<Animation> {
        None
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;

    #[derive(Debug, Default)]
    pub struct MockAnimationSource {
        animation: Option<Animation>,
    }

    impl MockAnimationSource {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_document(mut self, document: Value) -> Self {
            self.animation = Some(Animation::new(document));
            self
        }
    }

    #[async_trait]
    impl AnimationSource for MockAnimationSource {
        async fn fetch(&self) -> Option<Animation> {
            self.animation.clone()
        }
    }
}
