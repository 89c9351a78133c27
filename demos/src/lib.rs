//! Shared pieces of the `pathfinder` terminal demo.
//!
//! Builds scenes (from a layout file, the built-in board or a random wall
//! scatter), watches a search through [`Tracer`] and draws the result as
//! text.

use std::io;
use std::path::Path;
use std::thread;
use std::time::Duration;

use gridsearch_core::{CancelToken, Cell, Pos, Scene, SceneError};
use gridsearch_paths::{SearchError, SearchOutcome, Step, StepKind, StepLog, StepObserver};
use rand::{Rng, RngExt};

/// The board used when neither a map nor random walls are asked for.
pub const DEFAULT_LAYOUT: &str = "\
S.........
.###......
...#..##..
...#...#..
.......#..
..####.#..
.....#....
.#...#.##.
.#........
.#.......T";

#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error("reading map: {0}")]
    Io(#[from] io::Error),
    #[error("bad map: {0}")]
    Scene(#[from] SceneError),
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error("wall density {0} is not between 0 and 1")]
    Density(f64),
}

pub type DemoResult<T> = Result<T, DemoError>;

/// Load a text layout from `path`.
pub fn load(path: &Path) -> DemoResult<Scene> {
    let text = std::fs::read_to_string(path)?;
    Ok(Scene::parse(&text)?)
}

/// A `rows × cols` scene with each cell walled with probability `density`,
/// the start in the top-left corner and the target in the bottom-right.
pub fn scatter<R: Rng + ?Sized>(
    rows: i32,
    cols: i32,
    density: f64,
    rng: &mut R,
) -> DemoResult<Scene> {
    if !(0.0..=1.0).contains(&density) {
        return Err(DemoError::Density(density));
    }
    let mut scene = Scene::new(rows, cols);
    for row in 0..rows {
        for col in 0..cols {
            if rng.random::<f64>() < density {
                scene.set_cell(Pos::new(row, col), Cell::Obstacle);
            }
        }
    }
    scene.place_start(Pos::new(0, 0))?;
    scene.place_target(Pos::new(rows - 1, cols - 1))?;
    Ok(scene)
}

/// Observer driving the demo: records steps, optionally echoes them,
/// paces the search and stops it after a visit budget.
pub struct Tracer {
    pub log: StepLog,
    echo: bool,
    delay: Duration,
    max_visits: Option<usize>,
    visits: usize,
    cancel: CancelToken,
}

impl Tracer {
    pub fn new(cancel: CancelToken) -> Self {
        Self {
            log: StepLog::new(),
            echo: false,
            delay: Duration::ZERO,
            max_visits: None,
            visits: 0,
            cancel,
        }
    }

    /// Print every step to stderr.
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Sleep for `delay` after every step.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Cancel the search once `max` visits have been seen.
    pub fn with_max_visits(mut self, max: Option<usize>) -> Self {
        self.max_visits = max;
        self
    }
}

impl StepObserver for Tracer {
    fn on_step(&mut self, step: Step) {
        if self.echo {
            match step.kind {
                StepKind::Visited => eprintln!("visit {:>4}  {}", step.order, step.pos),
                StepKind::Frontier => eprintln!("queue       {}", step.pos),
            }
        }
        self.log.on_step(step);

        if step.kind == StepKind::Visited {
            self.visits += 1;
            if self.max_visits.is_some_and(|max| self.visits >= max) {
                self.cancel.cancel();
            }
        }
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }

    fn on_restart(&mut self, depth: usize) {
        if self.echo {
            eprintln!("-- depth {depth}");
        }
        self.log.on_restart(depth);
    }
}

/// Draw `scene` with the search overlaid.
///
/// `#` wall, `S`/`T` endpoints, `*` path, `+` visited, `o` still queued,
/// `.` untouched.
pub fn render(scene: &Scene, log: &StepLog, outcome: &SearchOutcome) -> String {
    let grid = scene.grid();
    let mut marks: Vec<char> = grid
        .iter()
        .map(|(_, cell)| if cell.is_passable() { '.' } else { '#' })
        .collect();

    let mut mark = |p: Pos, ch: char| {
        if let Some(i) = grid.index(p) {
            marks[i] = ch;
        }
    };
    for p in log.frontier() {
        mark(p, 'o');
    }
    for p in log.visited() {
        mark(p, '+');
    }
    for &p in &outcome.path {
        mark(p, '*');
    }
    if let Some(p) = scene.start() {
        mark(p, 'S');
    }
    if let Some(p) = scene.target() {
        mark(p, 'T');
    }

    let cols = grid.cols().max(1) as usize;
    let mut out = String::with_capacity(marks.len() * 2);
    for (i, line) in marks.chunks(cols).enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let mut first = true;
        for &ch in line {
            if !first {
                out.push(' ');
            }
            out.push(ch);
            first = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridsearch_paths::{SearchRequest, Strategy};
    use rand::SeedableRng;

    #[test]
    fn default_layout_parses() {
        let scene = Scene::parse(DEFAULT_LAYOUT).unwrap();
        assert_eq!(scene.start(), Some(Pos::new(0, 0)));
        assert_eq!(scene.target(), Some(Pos::new(9, 9)));
        assert_eq!(scene.grid().len(), 100);
    }

    #[test]
    fn default_layout_is_solvable_by_everything() {
        let scene = Scene::parse(DEFAULT_LAYOUT).unwrap();
        for strategy in Strategy::ALL {
            // Shallow limits can miss around the walls.
            let strategy = match strategy {
                Strategy::Dls { .. } => Strategy::Dls { limit: 100 },
                s => s,
            };
            let out = SearchRequest::from_scene(&scene, strategy)
                .run(&mut StepLog::new(), &CancelToken::new())
                .unwrap();
            assert!(out.found, "{strategy}");
        }
    }

    #[test]
    fn scatter_keeps_endpoints_clear() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(3);
        let scene = scatter(6, 7, 1.0, &mut rng).unwrap();
        assert_eq!(scene.start(), Some(Pos::new(0, 0)));
        assert_eq!(scene.target(), Some(Pos::new(5, 6)));
        assert!(scene.grid().is_passable(Pos::new(0, 0)));
        assert!(scene.grid().is_passable(Pos::new(5, 6)));
        assert_eq!(scene.grid().count(Cell::Obstacle), 6 * 7 - 2);
    }

    #[test]
    fn scatter_rejects_bad_density() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(3);
        assert!(matches!(
            scatter(4, 4, 1.5, &mut rng),
            Err(DemoError::Density(_))
        ));
    }

    #[test]
    fn render_marks_path_and_visits() {
        let scene = Scene::parse("S..\n.#.\n..T").unwrap();
        let mut log = StepLog::new();
        let out = SearchRequest::from_scene(&scene, Strategy::Bfs)
            .run(&mut log, &CancelToken::new())
            .unwrap();
        // (0,1) queues (1,2) diagonally, ahead of anything from (1,0).
        assert_eq!(
            out.path,
            vec![Pos::new(0, 0), Pos::new(0, 1), Pos::new(1, 2), Pos::new(2, 2)]
        );
        assert_eq!(render(&scene, &log, &out), "S * +\n+ # *\n+ + T");
    }

    #[test]
    fn tracer_stops_after_budget() {
        let scene = Scene::parse(DEFAULT_LAYOUT).unwrap();
        let cancel = CancelToken::new();
        let mut tracer = Tracer::new(cancel.clone()).with_max_visits(Some(4));
        let out = SearchRequest::from_scene(&scene, Strategy::Bfs)
            .run(&mut tracer, &cancel)
            .unwrap();
        assert!(!out.found);
        assert!(cancel.is_cancelled());
        assert_eq!(tracer.log.visited().count(), 4);
    }
}
