use super::cli::Cli;
use super::error::CliError;
use super::io;
use gbasis::{get_default_basis, BasisSet};

pub fn run(args: Cli) -> Result<(), CliError> {
    let basis = if let Some(basis_path) = &args.basis.basis {
        BasisSet::load_from_file(basis_path)?
    } else {
        get_default_basis().clone()
    };

    let source_name = match &args.basis.basis {
        Some(path) => path.display().to_string(),
        None => "built-in".to_string(),
    };

    let mut selected: Vec<u8> = if args.elements.is_empty() {
        basis.atoms.keys().copied().collect()
    } else {
        args.elements
            .iter()
            .map(|selector| io::parse_element(selector))
            .collect::<Result<Vec<_>, _>>()?
    };
    selected.sort_unstable();
    selected.dedup();

    let entries: Vec<_> = selected
        .iter()
        .map(|&z| basis.get(z).map(|atom| (z, atom)))
        .collect::<Result<Vec<_>, _>>()?;

    let writer = io::get_writer(&args.output.output)?;
    io::write_summary(
        writer,
        &entries,
        &args.output.format,
        args.output.precision,
        &source_name,
    )?;

    Ok(())
}
