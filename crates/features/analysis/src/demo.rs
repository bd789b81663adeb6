//! Built-in sample posts, alternating positive and negative.

use shub_kernel::domain::constants::DEMO_POSTS;

pub const DEMO_BATCH: [&str; DEMO_POSTS] = [
    "I absolutely love this product! Best purchase I've made this year. Highly recommend it to everyone!",
    "This is terrible. Worst experience ever. I want my money back immediately.",
    "Just had an amazing day at the beach with friends. Life is beautiful!",
    "Feeling so frustrated and disappointed with the customer service. Never shopping here again.",
    "The new update is fantastic! Everything works so smoothly now. Great job developers!",
    "This app keeps crashing. So annoying and unreliable. Waste of time.",
    "What a wonderful surprise! Exceeded all my expectations. Five stars!",
    "Completely useless and overpriced. Don't waste your money on this garbage.",
    "Having such a great time at the concert! The energy is incredible!",
    "Stuck in traffic for hours. This is the worst commute of my life.",
    "Just finished reading an inspiring book. Feeling motivated and energized!",
    "The food was cold and tasteless. Very disappointing dining experience.",
    "Congratulations to the team! Outstanding performance and well-deserved victory!",
    "Another delay and no explanation. This airline is a complete disaster.",
    "Beautiful sunset today. Nature never fails to amaze me.",
    "Broken promises and poor quality. I expected so much better than this.",
    "Thank you for the wonderful gift! You always know how to make me smile.",
    "Rude staff and dirty facilities. Will never return to this place.",
    "Excited about the new opportunities ahead! Can't wait to get started!",
    "System is down again. How is this acceptable? Completely unreliable service.",
];

/// The first `count` demo posts (all of them when `count` exceeds the batch).
#[must_use]
pub fn demo_posts(count: usize) -> &'static [&'static str] {
    &DEMO_BATCH[..count.min(DEMO_BATCH.len())]
}
