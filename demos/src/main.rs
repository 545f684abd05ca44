//! Terminal pathfinding demo: a random square map and a hex map, drawn with
//! crossterm colours.
//!
//! Run: cargo run --bin pathfind [seed]

use std::error::Error;
use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use gridnav_core::{
    Grid, GridCoord, Heuristic, HexCoord, HexGrid, HexGridConfig, NeighborMode, Orientation,
    SquareGrid, SquareGridConfig,
};
use gridnav_paths::{FindPathOptions, Pathfinder, PathfinderConfig};
use rand::{RngExt, SeedableRng};

const WIDTH: i32 = 30;
const HEIGHT: i32 = 15;
const WALL_CHANCE: f64 = 0.25;
const HEX_RADIUS: i32 = 4;

const COL_WALL: Color = Color::DarkGrey;
const COL_FLOOR: Color = Color::Grey;
const COL_PATH: Color = Color::Cyan;
const COL_ENDPOINT: Color = Color::Yellow;
const COL_REACH: Color = Color::Green;

fn put(out: &mut impl Write, color: Color, ch: char) -> io::Result<()> {
    queue!(out, SetForegroundColor(color), Print(ch), ResetColor)
}

/// Build the square map. Walls never cover the two corners used as
/// endpoints.
fn square_map(seed: u64) -> Result<SquareGrid<()>, Box<dyn Error>> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let mut grid = SquareGrid::with_config(SquareGridConfig {
        width: WIDTH,
        height: HEIGHT,
        neighbor_mode: NeighborMode::Eight,
        ..Default::default()
    });
    let start = GridCoord::new(0, 0);
    let end = GridCoord::new(WIDTH - 1, HEIGHT - 1);
    let cells: Vec<GridCoord> = grid.coords().collect();
    for c in cells {
        if c == start || c == end {
            continue;
        }
        if rng.random::<f64>() < WALL_CHANCE {
            grid.set_walkable(c, false)?;
        }
    }
    Ok(grid)
}

fn draw_square(out: &mut impl Write, grid: &SquareGrid<()>, path: &[GridCoord]) -> io::Result<()> {
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let c = GridCoord::new(x, y);
            if Some(&c) == path.first() {
                put(out, COL_ENDPOINT, 'S')?;
            } else if Some(&c) == path.last() {
                put(out, COL_ENDPOINT, 'E')?;
            } else if path.contains(&c) {
                put(out, COL_PATH, '*')?;
            } else if grid.is_walkable(c) {
                put(out, COL_FLOOR, '.')?;
            } else {
                put(out, COL_WALL, '#')?;
            }
        }
        queue!(out, Print('\n'))?;
    }
    Ok(())
}

fn draw_hex(
    out: &mut impl Write,
    grid: &HexGrid<()>,
    reach: &[HexCoord],
    line: &[HexCoord],
) -> io::Result<()> {
    let n = grid.radius();
    for r in -n..=n {
        queue!(out, Print(" ".repeat(r.unsigned_abs() as usize)))?;
        for q in (-n).max(-r - n)..=n.min(-r + n) {
            let h = HexCoord::new(q, r);
            if line.contains(&h) {
                put(out, COL_PATH, '*')?;
            } else if !grid.is_walkable(h) {
                put(out, COL_WALL, '#')?;
            } else if reach.contains(&h) {
                put(out, COL_REACH, 'o')?;
            } else {
                put(out, COL_FLOOR, '.')?;
            }
            queue!(out, Print(' '))?;
        }
        queue!(out, Print('\n'))?;
    }
    Ok(())
}

fn run(seed: u64) -> Result<bool, Box<dyn Error>> {
    let mut out = io::stdout().lock();

    let grid = square_map(seed)?;
    let pf = Pathfinder::with_config(
        &grid,
        PathfinderConfig {
            heuristic: Heuristic::Chebyshev,
            max_iterations: 5_000,
            ..Default::default()
        },
    );
    let start = GridCoord::new(0, 0);
    let end = GridCoord::new(WIDTH - 1, HEIGHT - 1);
    let path = pf.find_path_with(start, end, &FindPathOptions::default());
    match &path {
        Some(p) => {
            writeln!(
                out,
                "square {WIDTH}x{HEIGHT}, seed {seed}: {} steps, cost {:.2}",
                p.len() - 1,
                pf.path_cost(p)
            )?;
            draw_square(&mut out, &grid, p)?;
        }
        None => {
            writeln!(out, "square {WIDTH}x{HEIGHT}, seed {seed}: no path")?;
            draw_square(&mut out, &grid, &[])?;
        }
    }

    let mut hex: HexGrid<()> = HexGrid::with_config(HexGridConfig {
        radius: HEX_RADIUS,
        orientation: Orientation::Pointy,
        ..Default::default()
    })?;
    for h in HexCoord::ORIGIN.ring(2).into_iter().skip(3).take(5) {
        hex.set_walkable(h, false)?;
    }
    let hex_pf = Pathfinder::new(&hex);
    let reach = hex_pf.get_reachable_cells(HexCoord::ORIGIN, 3.0);
    let line = hex.line(HexCoord::new(-HEX_RADIUS, 0), HexCoord::new(HEX_RADIUS, -HEX_RADIUS));
    writeln!(
        out,
        "\nhex radius {HEX_RADIUS}: {} cells within cost 3 of center",
        reach.len()
    )?;
    draw_hex(&mut out, &hex, &reach, &line)?;
    out.flush()?;

    Ok(path.is_some())
}

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);

    match run(seed) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
