//! Text and JSON rendering of engine output.

use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;
use tutor_grid::{
    minutes_to_text, Classification, Interval, LegendEntry, Tutor, TutorSlotLabel, WeekGrid,
};

fn cell_char(class: Classification) -> char {
    match class {
        Classification::Free => 'F',
        Classification::Busy => 'B',
        Classification::Partial => '.',
    }
}

/// `"Mon 16"` style column header; falls back to the raw date.
fn day_header(date: &str) -> String {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|d| d.format("%a %d").to_string())
        .unwrap_or_else(|_| date.to_string())
}

pub fn text_grid(grid: &WeekGrid, legend: &[LegendEntry]) -> String {
    let mut out = format!("Week of {}  (F free, B busy, . partial)\n", grid.week_start);

    if legend.is_empty() {
        out.push_str("Selected: none\n");
    } else {
        let names: Vec<String> = legend
            .iter()
            .map(|e| format!("{} ({})", display_name(&e.name, e.id.as_str()), e.color))
            .collect();
        out.push_str(&format!("Selected: {}\n", names.join(", ")));
    }

    out.push_str("      ");
    for day in &grid.days {
        out.push_str(&format!(" {:^6}", day_header(&day.date)));
    }
    out.push('\n');

    for (i, slot) in grid.slots.iter().enumerate() {
        out.push_str(&minutes_to_text(slot.start));
        out.push(' ');
        for day in &grid.days {
            let c = day.cells.get(i).copied().map(cell_char).unwrap_or(' ');
            out.push_str(&format!(" {:^6}", c));
        }
        out.push('\n');
    }
    out
}

#[derive(Serialize)]
struct WindowDto {
    start: String,
    end: String,
    slot_minutes: i32,
}

#[derive(Serialize)]
struct DayDto<'a> {
    date: &'a str,
    cells: &'a [Classification],
}

#[derive(Serialize)]
struct LegendDto<'a> {
    id: &'a str,
    name: &'a str,
    color: &'a str,
}

#[derive(Serialize)]
struct GridDto<'a> {
    week_start: &'a str,
    window: WindowDto,
    slots: Vec<String>,
    days: Vec<DayDto<'a>>,
    legend: Vec<LegendDto<'a>>,
}

pub fn json_grid(grid: &WeekGrid, legend: &[LegendEntry]) -> Result<String> {
    let dto = GridDto {
        week_start: &grid.week_start,
        window: WindowDto {
            start: minutes_to_text(grid.window.start),
            end: minutes_to_text(grid.window.end),
            slot_minutes: grid.window.slot_minutes,
        },
        slots: grid.slots.iter().map(|s| minutes_to_text(s.start)).collect(),
        days: grid
            .days
            .iter()
            .map(|d| DayDto {
                date: &d.date,
                cells: &d.cells,
            })
            .collect(),
        legend: legend
            .iter()
            .map(|e| LegendDto {
                id: e.id.as_str(),
                name: &e.name,
                color: &e.color,
            })
            .collect(),
    };
    let mut json = serde_json::to_string_pretty(&dto)?;
    json.push('\n');
    Ok(json)
}

fn display_name<'a>(name: &'a str, id: &'a str) -> &'a str {
    if name.is_empty() {
        id
    } else {
        name
    }
}

pub fn tutor_line(tutor: &Tutor) -> String {
    let subjects = if tutor.subjects.is_empty() {
        "Subjects N/A"
    } else {
        tutor.subjects.as_str()
    };
    format!(
        "{}\t{} — {}",
        tutor.id,
        display_name(&tutor.name, tutor.id.as_str()),
        subjects
    )
}

pub fn day_labels(slots: &[Interval], labels: &[TutorSlotLabel]) -> String {
    slots
        .iter()
        .zip(labels)
        .map(|(slot, label)| {
            let label = match label {
                TutorSlotLabel::Free => "free",
                TutorSlotLabel::Busy => "busy",
            };
            format!(
                "{}-{} {}\n",
                minutes_to_text(slot.start),
                minutes_to_text(slot.end),
                label
            )
        })
        .collect()
}
