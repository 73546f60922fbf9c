//! Maze layout resource.
//!
//! A [`MazeLayout`] is a 2-D grid of cell codes consumed once by
//! [`spawn_level`](crate::game::spawn_level):
//!
//! | code | meaning        |
//! |------|----------------|
//! | `0`  | open floor     |
//! | `1`  | wall (pillar)  |
//! | `2`  | skeleton spawn |
//!
//! Row index `i` maps to world X and column index `j` to world Z:
//! `x = origin_x + i * cell_spacing`, `z = origin_z + j * cell_spacing`.
//!
//! # JSON Format
//!
//! ```json
//! {
//!   "cell_spacing": 5.0,
//!   "origin_x": -50.0,
//!   "origin_z": -50.0,
//!   "pillar_width": 5.0,
//!   "pillar_height": 20.0,
//!   "enemy_spawn_height": 0.83,
//!   "player_spawn": [15, 10],
//!   "grid": ["11111", "10201", "11111"]
//! }
//! ```
//!
//! Every field except `grid` is optional. Dimensions fall back to the built-in
//! layout's values and `player_spawn` to cell (0, 0). Rows shorter than the
//! widest one are padded with open cells.

use bevy_ecs::prelude::Resource;
use glam::Vec3;
use log::warn;
use serde::Deserialize;
use std::path::Path;

/// The default 20×20 maze. The last six rows are open ground.
const BUILTIN_GRID: [&str; 20] = [
    "11111111111111111111",
    "10000000010100010101",
    "11111000000000010101",
    "10001000000001010101",
    "10101000000001010101",
    "10100000200001010101",
    "10101000001001010101",
    "10100000000001010101",
    "10111002002001010101",
    "10000001010001000101",
    "11111101110101111111",
    "11111111100111111111",
    "11111111101111111111",
    "11111111101111111111",
    "00000000000000000000",
    "00000000000000000000",
    "00000000000000000000",
    "00000000000000000000",
    "00000000000000000000",
    "00000000000000000000",
];

/// What occupies a maze cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Open,
    Wall,
    EnemySpawn,
}

impl CellKind {
    /// Map a cell code; anything unknown is open floor.
    pub fn from_code(code: u8) -> Self {
        match code {
            1 => CellKind::Wall,
            2 => CellKind::EnemySpawn,
            _ => CellKind::Open,
        }
    }
}

#[derive(Debug, Deserialize)]
struct MazeFile {
    grid: Vec<String>,
    cell_spacing: Option<f32>,
    origin_x: Option<f32>,
    origin_z: Option<f32>,
    pillar_width: Option<f32>,
    pillar_height: Option<f32>,
    enemy_spawn_height: Option<f32>,
    player_spawn: Option<(usize, usize)>,
}

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct MazeLayout {
    pub grid: Vec<Vec<u8>>,
    pub cell_spacing: f32,
    pub origin_x: f32,
    pub origin_z: f32,
    pub pillar_width: f32,
    pub pillar_height: f32,
    pub enemy_spawn_height: f32,
    /// Player spawn cell as (row, column).
    pub player_spawn: (usize, usize),
}

impl Default for MazeLayout {
    fn default() -> Self {
        Self {
            grid: BUILTIN_GRID.iter().map(|row| parse_row(row, 0)).collect(),
            cell_spacing: 5.0,
            origin_x: -50.0,
            origin_z: -50.0,
            pillar_width: 5.0,
            pillar_height: 20.0,
            enemy_spawn_height: 0.83,
            player_spawn: (15, 10),
        }
    }
}

/// Digits become codes; any other character becomes open floor with a warning.
fn parse_row(row: &str, index: usize) -> Vec<u8> {
    row.chars()
        .map(|c| match c.to_digit(10) {
            Some(d @ 0..=2) => d as u8,
            _ => {
                warn!("Maze row {}: unknown cell '{}', treating as open", index, c);
                0
            }
        })
        .collect()
}

impl MazeLayout {
    /// Build a layout from rows of digit strings using default dimensions.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Self {
        let mut layout = Self {
            grid: rows
                .iter()
                .enumerate()
                .map(|(i, r)| parse_row(r.as_ref(), i))
                .collect(),
            ..Self::default()
        };
        layout.pad_rows();
        layout
    }

    /// Parse the JSON layout format.
    pub fn from_json(text: &str) -> Result<Self, String> {
        let file: MazeFile =
            serde_json::from_str(text).map_err(|e| format!("Invalid maze JSON: {}", e))?;
        if file.grid.is_empty() {
            return Err("Maze grid is empty".to_string());
        }
        let defaults = Self::default();
        let mut layout = Self::from_rows(&file.grid);
        layout.cell_spacing = file.cell_spacing.unwrap_or(defaults.cell_spacing);
        layout.origin_x = file.origin_x.unwrap_or(defaults.origin_x);
        layout.origin_z = file.origin_z.unwrap_or(defaults.origin_z);
        layout.pillar_width = file.pillar_width.unwrap_or(defaults.pillar_width);
        layout.pillar_height = file.pillar_height.unwrap_or(defaults.pillar_height);
        layout.enemy_spawn_height = file
            .enemy_spawn_height
            .unwrap_or(defaults.enemy_spawn_height);
        let (row, col) = file.player_spawn.unwrap_or((0, 0));
        if row >= layout.rows() || col >= layout.width() {
            return Err(format!(
                "Player spawn ({}, {}) is outside the {}x{} grid",
                row,
                col,
                layout.rows(),
                layout.width()
            ));
        }
        layout.player_spawn = (row, col);
        Ok(layout)
    }

    /// Load the JSON layout from disk.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read maze file {}: {}", path.display(), e))?;
        Self::from_json(&text)
    }

    fn pad_rows(&mut self) {
        let width = self.width();
        for row in &mut self.grid {
            row.resize(width, 0);
        }
    }

    pub fn rows(&self) -> usize {
        self.grid.len()
    }

    pub fn width(&self) -> usize {
        self.grid.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn cell(&self, row: usize, col: usize) -> CellKind {
        self.grid
            .get(row)
            .and_then(|r| r.get(col))
            .map_or(CellKind::Open, |&code| CellKind::from_code(code))
    }

    /// World position of a cell center at height `y`.
    pub fn cell_to_world(&self, row: usize, col: usize, y: f32) -> Vec3 {
        Vec3::new(
            self.origin_x + row as f32 * self.cell_spacing,
            y,
            self.origin_z + col as f32 * self.cell_spacing,
        )
    }

    /// Every cell as (row, column, kind), row-major.
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, CellKind)> + '_ {
        self.grid.iter().enumerate().flat_map(|(i, row)| {
            row.iter()
                .enumerate()
                .map(move |(j, &code)| (i, j, CellKind::from_code(code)))
        })
    }

    pub fn player_spawn_position(&self) -> Vec3 {
        let (row, col) = self.player_spawn;
        self.cell_to_world(row, col, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_counts() {
        let maze = MazeLayout::default();
        assert_eq!(maze.rows(), 20);
        assert_eq!(maze.width(), 20);
        let spawns = maze
            .iter_cells()
            .filter(|(_, _, k)| *k == CellKind::EnemySpawn)
            .count();
        assert_eq!(spawns, 3);
        assert_eq!(maze.cell(5, 8), CellKind::EnemySpawn);
        assert_eq!(maze.cell(0, 0), CellKind::Wall);
        assert_eq!(maze.cell(15, 10), CellKind::Open);
    }

    #[test]
    fn test_builtin_player_spawn() {
        let maze = MazeLayout::default();
        assert_eq!(maze.player_spawn_position(), Vec3::new(25.0, 1.0, 0.0));
    }

    #[test]
    fn test_cell_to_world_maps_row_to_x() {
        let maze = MazeLayout::default();
        assert_eq!(maze.cell_to_world(2, 3, 10.0), Vec3::new(-40.0, 10.0, -35.0));
    }

    #[test]
    fn test_out_of_range_cell_is_open() {
        let maze = MazeLayout::from_rows(&["1"]);
        assert_eq!(maze.cell(4, 4), CellKind::Open);
    }

    #[test]
    fn test_short_rows_are_padded() {
        let maze = MazeLayout::from_rows(&["111", "1", "12"]);
        assert_eq!(maze.grid, vec![vec![1, 1, 1], vec![1, 0, 0], vec![1, 2, 0]]);
    }

    #[test]
    fn test_unknown_codes_are_open() {
        let maze = MazeLayout::from_rows(&["1x9"]);
        assert_eq!(maze.grid, vec![vec![1, 0, 0]]);
    }

    #[test]
    fn test_from_json_with_defaults() {
        let maze = MazeLayout::from_json(
            r#"{ "grid": ["111", "120", "111"], "cell_spacing": 2.0, "player_spawn": [1, 2] }"#,
        )
        .unwrap();
        assert_eq!(maze.cell(1, 1), CellKind::EnemySpawn);
        assert_eq!(maze.cell_spacing, 2.0);
        assert_eq!(maze.origin_x, -50.0);
        assert_eq!(maze.player_spawn, (1, 2));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(MazeLayout::from_json("not json").is_err());
        assert!(MazeLayout::from_json(r#"{ "grid": [] }"#).is_err());
    }

    #[test]
    fn test_from_json_rejects_spawn_outside_grid() {
        let err = MazeLayout::from_json(r#"{ "grid": ["111", "10"], "player_spawn": [2, 0] }"#)
            .unwrap_err();
        assert!(err.contains("outside"));
        assert!(MazeLayout::from_json(r#"{ "grid": ["111", "10"], "player_spawn": [0, 3] }"#).is_err());
        // Padded cells count as inside.
        assert!(MazeLayout::from_json(r#"{ "grid": ["111", "10"], "player_spawn": [1, 2] }"#).is_ok());
    }

    #[test]
    fn test_load_missing_file_fails() {
        let err = MazeLayout::load_from_file("./nope/maze.json").unwrap_err();
        assert!(err.contains("maze.json"));
    }
}
