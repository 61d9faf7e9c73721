use raylib::prelude::{Rectangle, Vector2};

const PADDING: f32 = 8.0;

/// One grid cell: a title bar above the panel body.
#[derive(Debug, Clone, Copy)]
pub struct Cell {
    pub title: Rectangle,
    pub body: Rectangle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Title,
    Body,
}

/// Result of hit-testing a window point.
#[derive(Debug, Clone, Copy)]
pub struct Hit {
    pub cell: usize,
    pub region: Region,
    /// Point relative to the top-left corner of the hit region.
    pub local: Vector2,
}

pub struct Layout {
    pub cells: Vec<Cell>,
}

impl Layout {
    /// Splits the window into `columns` x `rows` cells, row-major.
    pub fn grid(width: f32, height: f32, columns: usize, rows: usize, title_height: f32) -> Layout {
        let columns = columns.max(1);
        let rows = rows.max(1);
        let cell_width = (width - PADDING * (columns + 1) as f32) / columns as f32;
        let cell_height = (height - PADDING * (rows + 1) as f32) / rows as f32;
        let body_height = (cell_height - title_height).max(1.0);
        let cell_width = cell_width.max(1.0);

        let mut cells = Vec::with_capacity(columns * rows);
        for row in 0..rows {
            for column in 0..columns {
                let x = PADDING + column as f32 * (cell_width + PADDING);
                let y = PADDING + row as f32 * (cell_height + PADDING);
                cells.push(Cell {
                    title: Rectangle::new(x, y, cell_width, title_height),
                    body: Rectangle::new(x, y + title_height, cell_width, body_height),
                });
            }
        }

        Layout { cells }
    }

    pub fn hit_test(&self, point: Vector2) -> Option<Hit> {
        self.cells.iter().enumerate().find_map(|(cell, c)| {
            if contains(&c.title, point) {
                Some(Hit { cell, region: Region::Title, local: local(&c.title, point) })
            } else if contains(&c.body, point) {
                Some(Hit { cell, region: Region::Body, local: local(&c.body, point) })
            } else {
                None
            }
        })
    }
}

fn contains(rect: &Rectangle, p: Vector2) -> bool {
    p.x >= rect.x && p.x < rect.x + rect.width && p.y >= rect.y && p.y < rect.y + rect.height
}

fn local(rect: &Rectangle, p: Vector2) -> Vector2 {
    Vector2::new(p.x - rect.x, p.y - rect.y)
}
