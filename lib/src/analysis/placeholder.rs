use std::sync::atomic::{AtomicUsize, Ordering};


pub const EXAMPLE_TEXTS: [&str; 5] = [
    "I am so happy today! The weather is beautiful and everything is going perfectly.",
    "This makes me really angry and frustrated. I can't believe this happened!",
    "I'm feeling quite sad and lonely today. Nothing seems to be going right.",
    "That movie was absolutely disgusting. I couldn't watch it anymore.",
    "I'm so scared about the upcoming exam. What if I fail?",
];


/// Hands out the example texts in turn, wrapping around.
#[derive(Debug, Default)]
pub struct PlaceholderCycle {
    next: AtomicUsize,
}

impl PlaceholderCycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_example(&self) -> &'static str {
        let index = self.next.fetch_add(1, Ordering::Relaxed);
        EXAMPLE_TEXTS[index % EXAMPLE_TEXTS.len()]
    }
}
