use super::cli::OutputFormat;
use super::error::CliError;
use gbasis::{elements, BasisAtom};
use prettytable::*;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Resolves a command-line selector (symbol or atomic number) to an atomic number.
pub fn parse_element(selector: &str) -> Result<u8, CliError> {
    if let Ok(num) = selector.parse::<u8>() {
        return elements::symbol(num).map(|_| num).map_err(|e| CliError::Selector {
            selector: selector.to_string(),
            details: e.to_string(),
        });
    }

    elements::atomic_number(selector).map_err(|e| CliError::Selector {
        selector: selector.to_string(),
        details: e.to_string(),
    })
}

pub fn get_writer(output_path: &Option<PathBuf>) -> Result<Box<dyn Write>, CliError> {
    match output_path {
        Some(path) => {
            let file = std::fs::File::create(path).map_err(|e| CliError::Io {
                path: path.clone(),
                source: e,
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

pub fn write_summary(
    mut writer: Box<dyn Write>,
    entries: &[(u8, &BasisAtom)],
    format: &OutputFormat,
    precision: usize,
    source_name: &str,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Pretty => write_pretty_table(&mut writer, entries, precision, source_name),
        OutputFormat::Csv => write_csv(&mut writer, entries),
        OutputFormat::Json => write_json(&mut writer, entries, precision),
    }
}

/// Maps an angular-momentum code to its spectroscopic letter.
fn shell_letter(code: i32) -> String {
    match code {
        0 => "s".to_string(),
        1 => "p".to_string(),
        2 => "d".to_string(),
        3 => "f".to_string(),
        4 => "g".to_string(),
        other => format!("l{}", other),
    }
}

fn angular_momenta(atom: &BasisAtom) -> String {
    atom.basis_format
        .iter()
        .map(|&code| shell_letter(code))
        .collect::<Vec<_>>()
        .join(" ")
}

fn write_pretty_table(
    writer: &mut dyn Write,
    entries: &[(u8, &BasisAtom)],
    precision: usize,
    source_name: &str,
) -> Result<(), CliError> {
    let box_format = format::FormatBuilder::new()
        .column_separator('│')
        .borders('│')
        .separators(
            &[format::LinePosition::Top],
            format::LineSeparator::new('─', '┬', '╭', '╮'),
        )
        .separators(
            &[format::LinePosition::Title],
            format::LineSeparator::new('═', '╪', '╞', '╡'),
        )
        .separators(
            &[format::LinePosition::Intern],
            format::LineSeparator::new('─', '┼', '├', '┤'),
        )
        .separators(
            &[format::LinePosition::Bottom],
            format::LineSeparator::new('─', '┴', '╰', '╯'),
        )
        .padding(1, 1)
        .build();

    let mut title_table = Table::new();
    title_table.set_format(box_format);
    title_table.add_row(row![bc->format!("Basis Set Summary ({})", source_name)]);
    title_table.print(writer)?;
    writeln!(writer)?;

    let mut data_table = Table::new();
    data_table.set_format(box_format);
    data_table.set_titles(
        row![bc->"Z", bc->"Element", bc->"Shells", bc->"Primitives", bc->"Angular Momenta", bc->"Exponent Range"],
    );

    for (z, atom) in entries {
        let range = match (
            atom.exponents.iter().cloned().reduce(f64::min),
            atom.exponents.iter().cloned().reduce(f64::max),
        ) {
            (Some(lo), Some(hi)) => format!(
                "{:.prec$} - {:.prec$}",
                lo,
                hi,
                prec = precision
            ),
            _ => "-".to_string(),
        };

        data_table.add_row(row![
            r->z,
            l->atom.symbol,
            r->atom.shell_count(),
            r->atom.primitive_count(),
            l->angular_momenta(atom),
            r->range
        ]);
    }

    data_table.print(writer)?;

    Ok(())
}

fn write_csv(writer: &mut dyn Write, entries: &[(u8, &BasisAtom)]) -> Result<(), CliError> {
    writeln!(writer, "z,symbol,shells,primitives,angular_momenta")?;
    for (z, atom) in entries {
        writeln!(
            writer,
            "{},{},{},{},{}",
            z,
            atom.symbol,
            atom.shell_count(),
            atom.primitive_count(),
            angular_momenta(atom).replace(' ', ";")
        )?;
    }
    Ok(())
}

fn write_json(
    writer: &mut dyn Write,
    entries: &[(u8, &BasisAtom)],
    precision: usize,
) -> Result<(), CliError> {
    writeln!(writer, "{{")?;
    writeln!(writer, "  \"atoms\": [")?;
    for (i, (z, atom)) in entries.iter().enumerate() {
        let comma = if i < entries.len() - 1 { "," } else { "" };
        writeln!(writer, "    {{")?;
        writeln!(writer, "      \"atomic_number\": {},", z)?;
        writeln!(writer, "      \"symbol\": \"{}\",", atom.symbol)?;
        writeln!(writer, "      \"shells\": {},", atom.shell_count())?;
        writeln!(writer, "      \"primitives\": {},", atom.primitive_count())?;
        writeln!(
            writer,
            "      \"basis_format\": [{}],",
            atom.basis_format
                .iter()
                .map(|code| code.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        )?;
        writeln!(
            writer,
            "      \"exponents\": [{}]",
            atom.exponents
                .iter()
                .map(|e| format!("{:.*}", precision, e))
                .collect::<Vec<_>>()
                .join(", ")
        )?;
        writeln!(writer, "    }}{}", comma)?;
    }
    writeln!(writer, "  ]")?;
    writeln!(writer, "}}")?;
    Ok(())
}
