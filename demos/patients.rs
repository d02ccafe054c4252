//! Walks a patient roster through the grid's main interactions and prints
//! each rendered frame: quick search, column sort, an advanced filter, and
//! pagination.
//!
//! Run with: cargo run --example patients

use bubbletea_rs::{Cmd, KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use datagrid_widgets::prelude::*;

#[derive(Clone)]
struct Patient {
    id: u32,
    name: &'static str,
    age: i64,
    last_visit: Option<chrono::NaiveDate>,
    active: bool,
}

impl Row for Patient {
    fn id(&self) -> String {
        self.id.to_string()
    }

    fn field(&self, key: &str) -> CellValue {
        match key {
            "name" => self.name.into(),
            "age" => self.age.into(),
            "last_visit" => self
                .last_visit
                .map(CellValue::Date)
                .unwrap_or(CellValue::Null),
            "active" => self.active.into(),
            _ => CellValue::Null,
        }
    }
}

struct Console;

impl GridDelegate<Patient> for Console {
    fn on_view(&self, row: &Patient) -> Option<Cmd> {
        println!(">> view patient {} ({})", row.id, row.name);
        None
    }

    fn on_search(&self, filters: &[SearchFilter]) -> Option<Cmd> {
        println!(">> {} filter(s) applied", filters.len());
        None
    }

    fn on_clear(&self) -> Option<Cmd> {
        println!(">> filters cleared");
        None
    }
}

fn roster() -> Vec<Patient> {
    let date = |y, m, d| chrono::NaiveDate::from_ymd_opt(y, m, d);
    vec![
        Patient { id: 1, name: "Ana Gomez", age: 30, last_visit: date(2024, 3, 14), active: true },
        Patient { id: 2, name: "Bruno Diaz", age: 45, last_visit: date(2024, 1, 9), active: false },
        Patient { id: 3, name: "Mariana Ruiz", age: 22, last_visit: None, active: true },
        Patient { id: 4, name: "Carlos Vega", age: 61, last_visit: date(2023, 11, 2), active: true },
        Patient { id: 5, name: "Lucia Peralta", age: 38, last_visit: date(2024, 2, 28), active: false },
        Patient { id: 6, name: "Diego Sosa", age: 27, last_visit: date(2024, 3, 1), active: true },
        Patient { id: 7, name: "Elena Bravo", age: 54, last_visit: None, active: true },
    ]
}

fn press(grid: &mut Grid<Patient>, code: KeyCode) {
    let msg: Msg = Box::new(KeyMsg {
        key: code,
        modifiers: KeyModifiers::NONE,
    });
    grid.update(&msg);
}

fn ctrl(grid: &mut Grid<Patient>, c: char) {
    let msg: Msg = Box::new(KeyMsg {
        key: KeyCode::Char(c),
        modifiers: KeyModifiers::CONTROL,
    });
    grid.update(&msg);
}

fn frame(label: &str, grid: &Grid<Patient>) {
    println!("--- {} ---", label);
    println!("{}\n", grid.render());
}

fn main() {
    let columns = vec![
        Column::new("name", "Name").sortable(),
        Column::new("age", "Age").sortable().with_width(5),
        Column::new("last_visit", "Last visit"),
        Column::new("active", "Active"),
    ];

    let source = VecSource::new(roster());
    let mut grid = Grid::new(Vec::new(), columns, 80, 24)
        .with_title("Patients")
        .with_delegate(Console)
        .with_per_page(4);
    grid.load(&source);

    frame("initial", &grid);

    // Quick search narrows the roster live.
    press(&mut grid, KeyCode::Char('/'));
    for c in "ana".chars() {
        press(&mut grid, KeyCode::Char(c));
    }
    frame("searching \"ana\"", &grid);
    press(&mut grid, KeyCode::Esc);

    // Sort by age, descending on the second press.
    press(&mut grid, KeyCode::Right);
    press(&mut grid, KeyCode::Char('s'));
    press(&mut grid, KeyCode::Char('s'));
    frame("sorted by age, descending", &grid);

    // Advanced filter: age between 25 and 50.
    press(&mut grid, KeyCode::Char('f'));
    press(&mut grid, KeyCode::Right);
    press(&mut grid, KeyCode::Right); // field: age
    press(&mut grid, KeyCode::Tab);
    for _ in 0..7 {
        press(&mut grid, KeyCode::Right); // operator: between
    }
    press(&mut grid, KeyCode::Tab);
    for c in "25..50".chars() {
        press(&mut grid, KeyCode::Char(c));
    }
    press(&mut grid, KeyCode::Enter);
    ctrl(&mut grid, 's');
    frame("age between 25 and 50", &grid);

    // Paging through the restored roster.
    press(&mut grid, KeyCode::Char('c'));
    press(&mut grid, KeyCode::PageDown);
    frame("page 2", &grid);

    // Row actions go through the delegate.
    press(&mut grid, KeyCode::Enter);

    // A session stopwatch renders alongside the grid in real programs.
    let watch = Stopwatch::new();
    println!("session time: {}", watch.view());
}
