use crate::TileColor;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

/// A random `(block_color, gem_color)` pair.
pub fn random_color_pair<R: Rng + ?Sized>(rng: &mut R) -> (TileColor, TileColor) {
    (rng.gen(), rng.gen())
}

/// A random [color](TileColor) other than `color`.
pub fn random_different_color<R: Rng + ?Sized>(rng: &mut R, color: TileColor) -> TileColor {
    let possible_indexes = Uniform::from(0..TileColor::COLORS_LEN - 1);
    let random_index = possible_indexes.sample(rng);
    // removing the color at its own index in the array colors
    let random_different_index = random_index + if random_index < color as usize { 0 } else { 1 };
    TileColor::colors()[random_different_index]
}

/// A new pair with a random, different gem [color](TileColor) but the same block
/// [color](TileColor).
pub fn random_different_gem_same_block<R: Rng + ?Sized>(
    rng: &mut R,
    (block_color, gem_color): (TileColor, TileColor),
) -> (TileColor, TileColor) {
    (block_color, random_different_color(rng, gem_color))
}

/// A new pair with a random, different block [color](TileColor) but the same gem
/// [color](TileColor).
pub fn random_different_block_same_gem<R: Rng + ?Sized>(
    rng: &mut R,
    (block_color, gem_color): (TileColor, TileColor),
) -> (TileColor, TileColor) {
    (random_different_color(rng, block_color), gem_color)
}

/// A new pair sharing neither [color](TileColor).
pub fn random_different_colors<R: Rng + ?Sized>(
    rng: &mut R,
    (block_color, gem_color): (TileColor, TileColor),
) -> (TileColor, TileColor) {
    (
        random_different_color(rng, block_color),
        random_different_color(rng, gem_color),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_different_color_never_same() {
        let mut rng = rand::thread_rng();
        for color in TileColor::colors() {
            for _ in 0..50 {
                assert_ne!(color, random_different_color(&mut rng, color));
            }
        }
    }

    #[test]
    fn random_different_pairs() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let pair = random_color_pair(&mut rng);

            let same_block = random_different_gem_same_block(&mut rng, pair);
            assert_eq!(pair.0, same_block.0);
            assert_ne!(pair.1, same_block.1);

            let same_gem = random_different_block_same_gem(&mut rng, pair);
            assert_ne!(pair.0, same_gem.0);
            assert_eq!(pair.1, same_gem.1);

            let different = random_different_colors(&mut rng, pair);
            assert_ne!(pair.0, different.0);
            assert_ne!(pair.1, different.1);
        }
    }
}
