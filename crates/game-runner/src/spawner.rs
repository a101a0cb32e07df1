//! Tile spawning, the one piece of chance in 2048. The engine stays
//! deterministic; this module owns the dice.

use anyhow::Result;
use rand::seq::SliceRandom;
use rand::Rng;
use twenty48_core::{Game, Tile};

/// Face value for a spawned tile: 2 nine times out of ten, otherwise 4.
pub fn random_tile_value<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    if rng.gen_range(0..10) < 9 { 2 } else { 4 }
}

/// Drop a random tile onto a uniformly chosen empty cell. Returns whether a
/// tile was placed; a full board spawns nothing.
pub fn spawn_random_tile<R: Rng + ?Sized>(game: &mut Game, rng: &mut R) -> Result<bool> {
    let positions = game.empty_positions();
    let (col, row) = match positions.choose(rng) {
        Some(&pos) => pos,
        None => return Ok(false),
    };
    game.add_tile(Tile::new(random_tile_value(rng), col, row))?;
    Ok(true)
}

/// Start-of-game setup: two spawned tiles, 2048-style.
pub fn seed_board<R: Rng + ?Sized>(game: &mut Game, rng: &mut R) -> Result<()> {
    for _ in 0..2 {
        spawn_random_tile(game, rng)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn spawns_land_on_empty_cells_until_the_board_fills() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut game = Game::new(2);
        for _ in 0..4 {
            assert!(spawn_random_tile(&mut game, &mut rng).unwrap());
        }
        assert!(game.empty_positions().is_empty());
        assert!(!spawn_random_tile(&mut game, &mut rng).unwrap());
    }

    #[test]
    fn spawned_values_are_twos_and_fours() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let value = random_tile_value(&mut rng);
            assert!(value == 2 || value == 4);
        }
    }

    #[test]
    fn seeding_places_exactly_two_tiles() {
        let mut rng = StdRng::seed_from_u64(123);
        let mut game = Game::new(4);
        seed_board(&mut game, &mut rng).unwrap();
        assert_eq!(game.empty_positions().len(), 14);
    }
}
