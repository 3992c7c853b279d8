use crate::domain::models::JsonOut;
use serde::Serialize;

fn print_json<T: Serialize>(ok: bool, data: T) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&JsonOut { ok, data })?
    );
    Ok(())
}

/// One text line per row, or a single JSON envelope around the whole list.
pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        return print_json(true, data);
    }
    for d in data {
        println!("{}", row(d));
    }
    Ok(())
}

/// Like [`print_one`] but the envelope's `ok` reflects the report.
pub fn print_report<T: Serialize>(
    json: bool,
    ok: bool,
    data: T,
    render: impl Fn(&T) -> Vec<String>,
) -> anyhow::Result<()> {
    if json {
        return print_json(ok, data);
    }
    for line in render(&data) {
        println!("{}", line);
    }
    Ok(())
}

pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    print_report(json, true, data, |d| vec![row(d)])
}
