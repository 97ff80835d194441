use rand::Rng;
use tracing::debug;

use crate::config::{Rules, BOARD_HEIGHT, BOARD_WIDTH, MAX_SNAKE_LENGTH};
use Direction::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    pub fn is_wall(self) -> bool {
        self.x <= 1 || self.x >= BOARD_WIDTH || self.y <= 1 || self.y >= BOARD_HEIGHT
    }

    pub fn step(self, direction: Direction) -> Point {
        let (dx, dy) = direction.offset();
        Point::new(self.x + dx, self.y + dy)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn offset(self) -> (i32, i32) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Step {
    Moved {
        new_head: Point,
        vacated: Option<Point>,
        new_food: Option<Point>,
    },
    Crashed,
    Over,
}

pub struct Game<R> {
    body: Vec<Point>,
    direction: Direction,
    food: Point,
    score: u32,
    game_over: bool,
    rules: Rules,
    rng: R,
}

impl<R: Rng> Game<R> {
    pub fn new(rng: R, rules: Rules) -> Self {
        let center = Point::new(BOARD_WIDTH / 2, BOARD_HEIGHT / 2);
        let mut game = Game::from_parts(rng, rules, vec![center], Up, center);
        game.food = game.spawn_food();
        game
    }

    pub fn from_parts(rng: R, rules: Rules, body: Vec<Point>, direction: Direction, food: Point) -> Self {
        assert!(!body.is_empty(), "a snake needs at least a head");
        Game { body, direction, food, score: 0, game_over: false, rules, rng }
    }

    pub fn body(&self) -> &[Point] {
        &self.body
    }

    pub fn head(&self) -> Point {
        self.body[0]
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn food(&self) -> Point {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }

    pub fn turn(&mut self, direction: Direction) {
        if self.rules.no_reverse && self.body.len() > 1 && direction == self.direction.opposite() {
            debug!(?direction, "ignoring reversal");
            return;
        }
        self.direction = direction;
    }

    pub fn advance(&mut self) -> Step {
        if self.game_over {
            return Step::Over;
        }

        let new_head = self.head().step(self.direction);

        // The tail is still part of the body here, so chasing it is fatal too
        if new_head.is_wall() || self.body.contains(&new_head) {
            self.game_over = true;
            return Step::Crashed;
        }

        self.body.insert(0, new_head);

        let ate = new_head == self.food;
        let vacated = if ate && self.body.len() <= MAX_SNAKE_LENGTH {
            None
        } else {
            self.body.pop()
        };

        let new_food = if ate {
            self.score += 1;
            self.food = self.spawn_food();
            Some(self.food)
        } else {
            None
        };

        Step::Moved { new_head, vacated, new_food }
    }

    fn spawn_food(&mut self) -> Point {
        loop {
            let pos = Point::new(self.rng.gen_range(2..BOARD_WIDTH), self.rng.gen_range(2..BOARD_HEIGHT));
            if !self.rules.safe_food || !self.body.contains(&pos) {
                debug!(x = pos.x, y = pos.y, "food spawned");
                return pos;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn game(body: Vec<Point>, direction: Direction, food: Point) -> Game<StdRng> {
        Game::from_parts(StdRng::seed_from_u64(1), Rules::default(), body, direction, food)
    }

    #[test]
    fn new_game_starts_centered_heading_up() {
        let g = Game::new(StdRng::seed_from_u64(3), Rules::default());
        assert_eq!(g.body(), &[Point::new(20, 10)]);
        assert_eq!(g.direction(), Up);
        assert_eq!(g.score(), 0);
        assert!(!g.is_over());
        assert!(!g.food().is_wall());
    }

    #[test]
    fn wall_cells() {
        assert!(Point::new(1, 5).is_wall());
        assert!(Point::new(40, 5).is_wall());
        assert!(Point::new(5, 1).is_wall());
        assert!(Point::new(5, 20).is_wall());
        assert!(!Point::new(2, 2).is_wall());
        assert!(!Point::new(39, 19).is_wall());
    }

    #[test]
    fn opposite_is_symmetric() {
        for d in [Up, Down, Left, Right].iter() {
            assert_eq!(d.opposite().opposite(), *d);
            let (dx, dy) = d.offset();
            assert_eq!(d.opposite().offset(), (-dx, -dy));
        }
    }

    #[test]
    fn tail_is_vacated_on_a_plain_move() {
        let mut g = game(vec![Point::new(10, 10), Point::new(10, 11)], Up, Point::new(30, 15));
        let step = g.advance();
        assert_eq!(
            step,
            Step::Moved { new_head: Point::new(10, 9), vacated: Some(Point::new(10, 11)), new_food: None }
        );
        assert_eq!(g.body(), &[Point::new(10, 9), Point::new(10, 10)]);
    }

    #[test]
    fn running_into_own_body_ends_the_game() {
        // A hook shape where turning left lands on the body
        let body = vec![Point::new(10, 10), Point::new(11, 10), Point::new(11, 11), Point::new(10, 11), Point::new(9, 11), Point::new(9, 10)];
        let mut g = game(body.clone(), Up, Point::new(30, 15));
        g.turn(Left);
        assert_eq!(g.advance(), Step::Crashed);
        assert!(g.is_over());
        assert_eq!(g.body(), &body[..]);
    }

    #[test]
    fn reversing_is_allowed_by_default_and_fatal() {
        let mut g = game(vec![Point::new(10, 10), Point::new(10, 11)], Up, Point::new(30, 15));
        g.turn(Down);
        assert_eq!(g.direction(), Down);
        assert_eq!(g.advance(), Step::Crashed);
    }

    #[test]
    fn reversing_can_be_disabled() {
        let rules = Rules { no_reverse: true, safe_food: false };
        let body = vec![Point::new(10, 10), Point::new(10, 11)];
        let mut g = Game::from_parts(StdRng::seed_from_u64(1), rules, body, Up, Point::new(30, 15));
        g.turn(Down);
        assert_eq!(g.direction(), Up);
        g.turn(Left);
        assert_eq!(g.direction(), Left);
    }

    #[test]
    fn single_segment_may_reverse_freely() {
        let rules = Rules { no_reverse: true, safe_food: false };
        let mut g = Game::from_parts(StdRng::seed_from_u64(1), rules, vec![Point::new(10, 10)], Up, Point::new(30, 15));
        g.turn(Down);
        assert_eq!(g.direction(), Down);
        assert!(matches!(g.advance(), Step::Moved { .. }));
    }

    #[test]
    fn growth_stops_at_the_length_cap() {
        let body: Vec<Point> = (0..MAX_SNAKE_LENGTH as i32).rev().map(|i| Point::new(2 + i % 38, 19 - i / 38)).collect();
        let head = body[0];
        let food = head.step(Up);
        let mut g = game(body, Up, food);
        match g.advance() {
            Step::Moved { vacated, new_food, .. } => {
                assert!(vacated.is_some());
                assert!(new_food.is_some());
            }
            other => panic!("unexpected step {:?}", other),
        }
        assert_eq!(g.body().len(), MAX_SNAKE_LENGTH);
        assert_eq!(g.score(), 1);
    }

    #[test]
    fn safe_food_never_lands_on_the_snake() {
        let rules = Rules { no_reverse: false, safe_food: true };
        // Fill most of the interior so the unchecked roll would often hit the body
        let body: Vec<Point> = (0..MAX_SNAKE_LENGTH as i32).rev().map(|i| Point::new(2 + i % 38, 19 - i / 38)).collect();
        for seed in 0..50 {
            let mut g = Game::from_parts(StdRng::seed_from_u64(seed), rules, body.clone(), Up, Point::new(2, 2));
            let food = g.spawn_food();
            assert!(!g.body().contains(&food));
            assert!(!food.is_wall());
        }
    }
}
