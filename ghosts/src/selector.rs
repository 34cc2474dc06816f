use bevy_math::Vec2;
use rand::Rng;

use crate::{
    constants::MIN_DIRECTION_COMMITMENT,
    direction::{Direction, forward_directions},
    kinematics::KinematicState,
    mode::GhostMode,
};

// ============================================================================
// Commitment Counter
// ============================================================================

// Ticks spent on the current heading since it was chosen. A ghost may only
// reconsider once the count reaches `MIN_DIRECTION_COMMITMENT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Commitment {
    count: u32,
}

impl Commitment {
    // Counter already at the threshold: the next decision is free.
    #[must_use]
    pub const fn ready() -> Self {
        Self {
            count: MIN_DIRECTION_COMMITMENT,
        }
    }

    #[must_use]
    pub const fn count(&self) -> u32 {
        self.count
    }

    #[must_use]
    pub const fn is_holding(&self) -> bool {
        self.count < MIN_DIRECTION_COMMITMENT
    }

    pub const fn release(&mut self) {
        self.count = MIN_DIRECTION_COMMITMENT;
    }

    const fn restart(&mut self) {
        self.count = 0;
    }

    const fn tick(&mut self) {
        self.count += 1;
    }
}

impl Default for Commitment {
    fn default() -> Self {
        Self::ready()
    }
}

// ============================================================================
// Direction Selection
// ============================================================================

/// Picks the heading for this tick.
///
/// FRIGHTENED ghosts wander randomly and never reverse while another option
/// exists. SCATTER and CHASE ghosts hold their heading for the commitment
/// window, then take the legal step that lands closest to `target`. Reversing
/// is only allowed when it is the sole legal move. Ties go to the first
/// direction in [`Direction::ALL`] order.
///
/// Returns `None` only when the ghost has no heading yet and nothing is legal.
pub fn select_direction<R: Rng>(
    mode: GhostMode,
    state: &KinematicState,
    legal: &[Direction],
    target: Vec2,
    commitment: &mut Commitment,
    rng: &mut R,
) -> Option<Direction> {
    let current = state.direction();

    if mode == GhostMode::Frightened {
        return pick_frightened_direction(rng, legal, current);
    }

    let chosen = choose_toward_target(state, legal, target, commitment);
    if chosen != current {
        commitment.restart();
    }
    chosen
}

pub fn pick_frightened_direction<R: Rng>(
    rng: &mut R,
    legal: &[Direction],
    current: Option<Direction>,
) -> Option<Direction> {
    let options = forward_directions(legal, current);
    if options.is_empty() {
        current
    } else {
        Some(options[rng.random_range(0..options.len())])
    }
}

fn choose_toward_target(
    state: &KinematicState,
    legal: &[Direction],
    target: Vec2,
    commitment: &mut Commitment,
) -> Option<Direction> {
    let current = state.direction();
    if legal.is_empty() {
        return current;
    }

    if let Some(heading) = current
        && commitment.is_holding()
        && legal.contains(&heading)
    {
        commitment.tick();
        return Some(heading);
    }

    let mut best: Option<(Direction, f32)> = None;
    for dir in forward_directions(legal, current) {
        let distance = state.potential_position(dir).distance(target);
        if best.is_none_or(|(_, best_distance)| distance < best_distance) {
            best = Some((dir, distance));
        }
    }

    best.map(|(dir, _)| dir).or_else(|| current.map(Direction::opposite))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn state_at(direction: Option<Direction>, speed: f32) -> KinematicState {
        let builder = KinematicState::builder().position(Vec2::ZERO).speed(speed);
        match direction {
            Some(dir) => builder.direction(dir).build(),
            None => builder.build(),
        }
    }

    #[test]
    fn picks_direction_closest_to_target() {
        // Up lands 10 from the target, Down lands 5.
        let state = state_at(Some(Direction::Left), 2.5);
        let target = Vec2::new(0.0, 7.5);
        let mut commitment = Commitment::ready();
        let mut rng = StdRng::seed_from_u64(1);

        let chosen = select_direction(
            GhostMode::Chase,
            &state,
            &[Direction::Up, Direction::Down],
            target,
            &mut commitment,
            &mut rng,
        );
        assert_eq!(chosen, Some(Direction::Down));
        assert_eq!(commitment.count(), 0);
    }

    #[test]
    fn ties_go_to_enumeration_order() {
        // Left and Right are equally far from a target straight below.
        let state = state_at(Some(Direction::Down), 1.0);
        let mut commitment = Commitment::ready();
        let mut rng = StdRng::seed_from_u64(1);

        let chosen = select_direction(
            GhostMode::Scatter,
            &state,
            &[Direction::Right, Direction::Left],
            Vec2::new(0.0, -50.0),
            &mut commitment,
            &mut rng,
        );
        assert_eq!(chosen, Some(Direction::Left));
    }

    #[test]
    fn no_legal_directions_keeps_heading() {
        let state = state_at(Some(Direction::Right), 1.0);
        let mut commitment = Commitment::ready();
        let mut rng = StdRng::seed_from_u64(1);

        for mode in [GhostMode::Scatter, GhostMode::Chase, GhostMode::Frightened] {
            let chosen = select_direction(mode, &state, &[], Vec2::new(-100.0, 0.0), &mut commitment, &mut rng);
            assert_eq!(chosen, Some(Direction::Right));
        }
        assert_eq!(commitment, Commitment::ready());
    }

    #[test]
    fn reverse_is_skipped_while_other_options_exist() {
        let state = state_at(Some(Direction::Right), 1.0);
        let mut commitment = Commitment::ready();
        let mut rng = StdRng::seed_from_u64(1);

        // Target is straight behind, but reversing is not allowed.
        let chosen = select_direction(
            GhostMode::Chase,
            &state,
            &[Direction::Left, Direction::Up, Direction::Right],
            Vec2::new(-100.0, 0.0),
            &mut commitment,
            &mut rng,
        );
        assert_eq!(chosen, Some(Direction::Up));
    }

    #[test]
    fn reverse_is_taken_when_it_is_the_only_way() {
        let state = state_at(Some(Direction::Right), 1.0);
        let mut commitment = Commitment::ready();
        let mut rng = StdRng::seed_from_u64(1);

        let chosen = select_direction(
            GhostMode::Scatter,
            &state,
            &[Direction::Left],
            Vec2::new(100.0, 0.0),
            &mut commitment,
            &mut rng,
        );
        assert_eq!(chosen, Some(Direction::Left));
        assert_eq!(commitment.count(), 0);
    }

    #[test]
    fn heading_is_held_for_the_commitment_window() {
        let all = Direction::ALL;
        let mut state = state_at(Some(Direction::Up), 1.0);
        let mut commitment = Commitment::ready();
        let mut rng = StdRng::seed_from_u64(1);

        let first = select_direction(
            GhostMode::Chase,
            &state,
            &all,
            Vec2::new(100.0, 10.0),
            &mut commitment,
            &mut rng,
        );
        assert_eq!(first, Some(Direction::Right));
        state.face(Direction::Right);

        // Target swings behind and above; the ghost keeps going right for eight ticks.
        for held in 1..=MIN_DIRECTION_COMMITMENT {
            let chosen = select_direction(
                GhostMode::Chase,
                &state,
                &all,
                Vec2::new(-100.0, -100.0),
                &mut commitment,
                &mut rng,
            );
            assert_eq!(chosen, Some(Direction::Right));
            assert_eq!(commitment.count(), held);
        }

        let reconsidered = select_direction(
            GhostMode::Chase,
            &state,
            &all,
            Vec2::new(-100.0, -100.0),
            &mut commitment,
            &mut rng,
        );
        assert_eq!(reconsidered, Some(Direction::Up));
        assert_eq!(commitment.count(), 0);
    }

    #[test]
    fn illegal_heading_breaks_commitment() {
        let state = state_at(Some(Direction::Right), 1.0);
        let mut commitment = Commitment::ready();
        commitment.restart();
        let mut rng = StdRng::seed_from_u64(1);

        let chosen = select_direction(
            GhostMode::Chase,
            &state,
            &[Direction::Up, Direction::Down],
            Vec2::new(0.0, 50.0),
            &mut commitment,
            &mut rng,
        );
        assert_eq!(chosen, Some(Direction::Down));
    }

    #[test]
    fn first_decision_has_no_reverse_to_exclude() {
        let state = state_at(None, 1.0);
        let mut commitment = Commitment::ready();
        let mut rng = StdRng::seed_from_u64(1);

        let chosen = select_direction(
            GhostMode::Scatter,
            &state,
            &Direction::ALL,
            Vec2::new(-40.0, 0.0),
            &mut commitment,
            &mut rng,
        );
        assert_eq!(chosen, Some(Direction::Left));
    }

    #[test]
    fn frightened_never_reverses_with_alternatives() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let chosen = pick_frightened_direction(&mut rng, &Direction::ALL, Some(Direction::Up));
            assert_ne!(chosen, Some(Direction::Down));
            let chosen = pick_frightened_direction(&mut rng, &[Direction::Down, Direction::Left], Some(Direction::Up));
            assert_eq!(chosen, Some(Direction::Left));
        }
    }

    #[test]
    fn frightened_takes_sole_option_even_if_reverse() {
        let mut rng = StdRng::seed_from_u64(7);
        let chosen = pick_frightened_direction(&mut rng, &[Direction::Down], Some(Direction::Up));
        assert_eq!(chosen, Some(Direction::Down));
    }

    #[test]
    fn frightened_ignores_target_and_commitment() {
        let state = state_at(Some(Direction::Up), 1.0);
        let mut commitment = Commitment::ready();
        commitment.restart();
        let mut rng = StdRng::seed_from_u64(3);

        let mut seen = Vec::new();
        for _ in 0..200 {
            let chosen = select_direction(
                GhostMode::Frightened,
                &state,
                &Direction::ALL,
                Vec2::new(0.0, -1000.0),
                &mut commitment,
                &mut rng,
            );
            if let Some(dir) = chosen
                && !seen.contains(&dir)
            {
                seen.push(dir);
            }
        }
        seen.sort_by_key(|dir| Direction::ALL.iter().position(|d| d == dir));
        assert_eq!(seen, vec![Direction::Up, Direction::Left, Direction::Right]);
        assert_eq!(commitment.count(), 0);
    }
}
