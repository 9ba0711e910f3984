//! The automaton: discriminator pass, color pass, and their orchestration.

use pelt_core::{DevelopError, GridBounds, GridError, Pos, Rgba, COLOR_D, COLOR_U};
use pelt_space::{NeighbourhoodStrategy, VonNeumann};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{debug, info};

use crate::config::{CellsConfig, ConfigError, DevelopParams, ExecutionMode};
use crate::field::DiscriminatorField;
use crate::raster::RasterBuffer;
use crate::seed;
use crate::visited::VisitedMask;

/// Outcome of a single generation's color pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Cells whose discriminator was positive (now [`COLOR_D`]).
    pub to_d: usize,
    /// Cells whose discriminator was negative (now [`COLOR_U`]).
    pub to_u: usize,
    /// Cells whose discriminator was exactly zero (color kept).
    pub held: usize,
    /// Cells whose color actually differs from the previous generation.
    pub changed: usize,
}

/// The cells of the automaton and the machinery to develop them.
///
/// Owns the raster, the discriminator scratch field, and the visited
/// mask. Holds no other state between generations: each
/// [`develop`](Self::develop) is a pure function of the current raster
/// and its arguments. In parallel mode it also owns the worker pool
/// that runs pass 1.
#[derive(Debug)]
pub struct Cells {
    raster: RasterBuffer,
    discs: DiscriminatorField,
    visited: VisitedMask,
    strategy: Box<dyn NeighbourhoodStrategy>,
    mode: ExecutionMode,
    pool: Option<ThreadPool>,
}

impl Cells {
    /// Build from a validated configuration.
    pub fn new(config: CellsConfig) -> Result<Self, ConfigError> {
        let bounds = config.validate()?;
        let mut cells = Self::from_raster(
            RasterBuffer::with_bounds(bounds, config.fill),
            config.strategy,
        );
        cells.set_mode(config.mode)?;
        Ok(cells)
    }

    /// A `width * height` grid filled with `fill`, using the
    /// [`VonNeumann`] metric and sequential execution.
    pub fn with_default_strategy(width: u32, height: u32, fill: Rgba) -> Result<Self, ConfigError> {
        Self::new(CellsConfig {
            width,
            height,
            fill,
            strategy: Box::new(VonNeumann),
            mode: ExecutionMode::Sequential,
        })
    }

    /// Take ownership of an existing raster.
    pub fn from_raster(raster: RasterBuffer, strategy: Box<dyn NeighbourhoodStrategy>) -> Self {
        let bounds = raster.bounds();
        Self {
            raster,
            discs: DiscriminatorField::new(bounds),
            visited: VisitedMask::new(bounds),
            strategy,
            mode: ExecutionMode::Sequential,
            pool: None,
        }
    }

    // ── Accessors ───────────────────────────────────────────────

    /// Grid dimensions.
    pub fn bounds(&self) -> GridBounds {
        self.raster.bounds()
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.raster.width()
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.raster.height()
    }

    /// The neighbourhood metric in use.
    pub fn strategy(&self) -> &dyn NeighbourhoodStrategy {
        self.strategy.as_ref()
    }

    /// Current pass-1 scheduling.
    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }

    /// Change pass-1 scheduling for subsequent generations.
    ///
    /// Parallel modes start their worker pool here; the previous pool, if
    /// any, is dropped. On error the current mode is kept.
    pub fn set_mode(&mut self, mode: ExecutionMode) -> Result<(), ConfigError> {
        self.pool = worker_pool(mode)?;
        self.mode = mode;
        Ok(())
    }

    /// The raster.
    pub fn raster(&self) -> &RasterBuffer {
        &self.raster
    }

    /// Consume the automaton and return its raster.
    pub fn into_raster(self) -> RasterBuffer {
        self.raster
    }

    /// Discriminators from the most recent pass 1 (all zero before the
    /// first generation).
    pub fn discs(&self) -> &DiscriminatorField {
        &self.discs
    }

    /// The visited mask.
    pub fn visited_mask(&self) -> &VisitedMask {
        &self.visited
    }

    /// Color at column `x`, row `y`.
    pub fn color(&self, x: u32, y: u32) -> Result<Rgba, GridError> {
        self.raster.color(x, y)
    }

    /// Paint one cell, e.g. to hand-place initial spots.
    pub fn set_color(&mut self, x: u32, y: u32, color: Rgba) -> Result<(), GridError> {
        self.raster.set_color(x, y, color)
    }

    /// Paint every cell.
    pub fn fill(&mut self, color: Rgba) {
        self.raster.fill(color);
    }

    /// Number of cells exactly equal to `color`.
    pub fn count(&self, color: Rgba) -> usize {
        self.raster.count(color)
    }

    /// Discriminator at column `x`, row `y`.
    pub fn disc(&self, x: u32, y: u32) -> Result<f32, GridError> {
        self.discs.get(x, y)
    }

    /// Whether column `x`, row `y` is marked visited.
    pub fn visited(&self, x: u32, y: u32) -> Result<bool, GridError> {
        self.visited.get(x, y)
    }

    /// Mark column `x`, row `y` visited.
    pub fn set_visited(&mut self, x: u32, y: u32) -> Result<(), GridError> {
        self.visited.set(x, y)
    }

    /// Clear the visited mask.
    pub fn reset_visited(&mut self) {
        self.visited.reset();
    }

    /// Paint each cell [`COLOR_D`] with probability `density`, else
    /// [`COLOR_U`], reproducibly from `seed`.
    pub fn seed_random(&mut self, density: f64, seed: u64) -> Result<(), ConfigError> {
        seed::seed_random(&mut self.raster, density, seed)
    }

    // ── Development ─────────────────────────────────────────────

    /// Count the cells equal to `target` in the disc of `center` at
    /// `radius`.
    pub fn count_matching(
        &self,
        center: Pos,
        radius: u32,
        target: Rgba,
    ) -> Result<usize, GridError> {
        count_matching(&self.raster, self.strategy.as_ref(), center, radius, target)
    }

    /// Pass 1 alone: recompute every discriminator from the current
    /// raster without changing any color.
    pub fn update_discs(&mut self, ra: u32, ri: u32, w: f32) -> Result<(), DevelopError> {
        let params = DevelopParams::new(ra, ri, w);
        params.validate()?;
        self.compute_discs(&params)
    }

    /// Develop one generation with activator radius `ra`, inhibitor
    /// radius `ri` and inhibitor weight `w`.
    ///
    /// Fails with [`DevelopError::InvalidRadii`] if `ra >= ri`, before
    /// any cell is read.
    pub fn develop(&mut self, ra: u32, ri: u32, w: f32) -> Result<(), DevelopError> {
        self.develop_params(&DevelopParams::new(ra, ri, w)).map(|_| ())
    }

    /// Develop one generation and report what pass 2 did.
    pub fn develop_params(&mut self, params: &DevelopParams) -> Result<StepReport, DevelopError> {
        params.validate()?;

        debug!(
            activator_radius = params.activator_radius,
            inhibitor_radius = params.inhibitor_radius,
            weight = params.inhibitor_weight,
            strategy = self.strategy.name(),
            "pass 1: computing discriminators"
        );
        self.compute_discs(params)?;
        debug!(
            positive = self.discs.positive_count(),
            negative = self.discs.negative_count(),
            "pass 1 done"
        );

        // Pass 1 has finished for every cell; colors may now change.
        debug!("pass 2: applying colors");
        let report = apply_discs(&mut self.raster, &self.discs);

        debug!(
            to_d = report.to_d,
            to_u = report.to_u,
            held = report.held,
            changed = report.changed,
            "generation developed"
        );
        Ok(report)
    }

    /// Develop `generations` times with the same parameters.
    ///
    /// There is no convergence check; callers that want one can loop
    /// over [`develop_params`](Self::develop_params) and inspect
    /// [`StepReport::changed`]. Returns the summed report.
    pub fn run(
        &mut self,
        params: &DevelopParams,
        generations: usize,
    ) -> Result<StepReport, DevelopError> {
        params.validate()?;
        let mut total = StepReport::default();
        for _ in 0..generations {
            let r = self.develop_params(params)?;
            total.to_d += r.to_d;
            total.to_u += r.to_u;
            total.held += r.held;
            total.changed += r.changed;
        }
        info!(
            generations,
            changed = total.changed,
            developed = self.raster.count(COLOR_D),
            "development finished"
        );
        Ok(total)
    }

    fn compute_discs(&mut self, params: &DevelopParams) -> Result<(), DevelopError> {
        let raster = &self.raster;
        let strategy = self.strategy.as_ref();
        let out = self.discs.as_mut_slice();
        match &self.pool {
            None => compute_band(raster, strategy, params, 0, out)?,
            Some(pool) => pool.install(|| compute_rows(raster, strategy, params, out))?,
        }
        Ok(())
    }
}

/// The worker pool for `mode`, or `None` when pass 1 runs on the
/// calling thread.
fn worker_pool(mode: ExecutionMode) -> Result<Option<ThreadPool>, ConfigError> {
    match mode {
        ExecutionMode::Sequential => Ok(None),
        ExecutionMode::Parallel { threads: 0 } => Err(ConfigError::ZeroThreads),
        ExecutionMode::Parallel { threads } => ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("pelt-pass1-{i}"))
            .build()
            .map(Some)
            .map_err(|e| ConfigError::ThreadPool {
                reason: e.to_string(),
            }),
    }
}

/// Count cells equal to `target` in the disc of `center` at `radius`.
pub(crate) fn count_matching(
    raster: &RasterBuffer,
    strategy: &dyn NeighbourhoodStrategy,
    center: Pos,
    radius: u32,
    target: Rgba,
) -> Result<usize, GridError> {
    let bounds = raster.bounds();
    let cells = raster.as_slice();
    let mut n = 0;
    strategy.visit(&bounds, center, radius, &mut |p| {
        if cells[bounds.index_unchecked(p)] == target {
            n += 1;
        }
    })?;
    Ok(n)
}

/// Discriminators for the rows starting at `first_row`, written into
/// `out` (a whole number of rows). Reads `raster` only.
fn compute_band(
    raster: &RasterBuffer,
    strategy: &dyn NeighbourhoodStrategy,
    params: &DevelopParams,
    first_row: u32,
    out: &mut [f32],
) -> Result<(), GridError> {
    let width = raster.width() as usize;
    for (i, slot) in out.iter_mut().enumerate() {
        let center = Pos::new((i % width) as u32, first_row + (i / width) as u32);
        let ad = count_matching(raster, strategy, center, params.activator_radius, COLOR_D)?;
        let within_ri =
            count_matching(raster, strategy, center, params.inhibitor_radius, COLOR_D)?;
        // Nested discs keep this non-negative; clamp for a strategy that
        // breaks nesting.
        let id = within_ri.saturating_sub(ad);
        *slot = ad as f32 - params.inhibitor_weight * id as f32;
    }
    Ok(())
}

/// Pass 1 with one rayon task per row. Every row is written before
/// this returns, so pass 2 never sees a partial field.
fn compute_rows(
    raster: &RasterBuffer,
    strategy: &dyn NeighbourhoodStrategy,
    params: &DevelopParams,
    out: &mut [f32],
) -> Result<(), GridError> {
    let width = raster.width() as usize;
    out.par_chunks_mut(width)
        .enumerate()
        .map(|(y, row)| compute_band(raster, strategy, params, y as u32, row))
        .collect()
}

/// Pass 2: positive → `COLOR_D`, negative → `COLOR_U`, zero → unchanged.
fn apply_discs(raster: &mut RasterBuffer, discs: &DiscriminatorField) -> StepReport {
    let mut report = StepReport::default();
    for (cell, &d) in raster.as_mut_slice().iter_mut().zip(discs.as_slice()) {
        let next = if d > 0.0 {
            report.to_d += 1;
            COLOR_D
        } else if d < 0.0 {
            report.to_u += 1;
            COLOR_U
        } else {
            report.held += 1;
            continue;
        };
        if *cell != next {
            report.changed += 1;
            *cell = next;
        }
    }
    report
}
