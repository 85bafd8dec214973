//! Random selection with an injected RNG, so seeded engines are reproducible.

use rand::seq::SliceRandom;
use rand::Rng;
use solace_core::VideoResource;

/// Anti-repetition rotation: uniformly among videos not yet in `seen`, or
/// uniformly among all of them once every video has been seen.
/// `None` only for an empty list.
pub fn choose_video<'a, R: Rng + ?Sized>(
    videos: &'a [VideoResource],
    seen: &[String],
    rng: &mut R,
) -> Option<&'a VideoResource> {
    let unseen: Vec<&VideoResource> = videos
        .iter()
        .filter(|v| !seen.iter().any(|id| *id == v.video_id))
        .collect();

    if unseen.is_empty() {
        videos.choose(rng)
    } else {
        unseen.choose(rng).copied()
    }
}

/// Uniform pick from a list of canned lines.
pub fn choose_line<R: Rng + ?Sized>(lines: &[&'static str], rng: &mut R) -> Option<&'static str> {
    lines.choose(rng).copied()
}
