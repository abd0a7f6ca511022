use clap::Parser;
use std::fs;
use std::io::{self, Read};

use crate::carbonate::solver::CalculationSummary;
use crate::error::AppError;
use crate::models::{Assumptions, Inputs};

#[derive(Parser, Debug)]
#[command(author, version, about = "Seawater carbonate-system calculator — optional JSON output", long_about = None)]
pub struct Args {
    #[arg(long)]
    json: bool,
    #[arg(
        long,
        value_name = "FILE",
        help = "JSON file with inputs and optional assumptions; '-' reads from stdin"
    )]
    input: Option<String>,
    #[arg(
        long,
        value_name = "JSON",
        help = "Inline JSON for inputs (overrides --input)"
    )]
    inputs_json: Option<String>,
    #[arg(
        long,
        value_name = "JSON",
        help = "Inline JSON for assumptions (optional, supplements --inputs-json)"
    )]
    assumptions_json: Option<String>,
}

fn parse_inline_inputs(
    inputs_json: &str,
    assumptions_json: Option<&String>,
) -> Result<(Inputs, Assumptions), AppError> {
    let inputs: Inputs =
        serde_json::from_str(inputs_json).map_err(|source| AppError::ParseInputsJson { source })?;

    let assumptions = match assumptions_json {
        Some(s) => serde_json::from_str::<Assumptions>(s)
            .map_err(|source| AppError::ParseAssumptionsJson { source })?,
        None => Assumptions::default(),
    };

    Ok((inputs, assumptions))
}

fn parse_cmd_input_doc(doc: &str) -> Result<(Inputs, Assumptions), AppError> {
    let parsed: CmdInput =
        serde_json::from_str(doc).map_err(|source| AppError::ParseCmdInputJson { source })?;
    Ok((parsed.inputs, parsed.assumptions.unwrap_or_default()))
}

pub fn parse_inputs(args: &Args) -> Result<(Inputs, Assumptions), AppError> {
    match (&args.inputs_json, &args.input) {
        (Some(inputs_json), _) => parse_inline_inputs(inputs_json, args.assumptions_json.as_ref()),
        (None, Some(path)) if path == "-" => {
            let mut s = String::new();
            io::stdin()
                .read_to_string(&mut s)
                .map_err(|source| AppError::ReadStdin { source })?;
            parse_cmd_input_doc(&s)
        }
        (None, Some(path)) => {
            let s = fs::read_to_string(path).map_err(|source| AppError::ReadFile {
                path: path.clone(),
                source,
            })?;
            parse_cmd_input_doc(&s)
        }
        (None, None) => Err(AppError::MissingInputData),
    }
}

#[derive(serde::Deserialize)]
struct CmdInput {
    inputs: Inputs,
    #[serde(default)]
    assumptions: Option<Assumptions>,
}

pub fn print_output(out: &CalculationSummary, args: &Args) -> Result<(), AppError> {
    if args.json {
        let s = serde_json::to_string_pretty(&out)
            .map_err(|source| AppError::SerializeOutput { source })?;
        println!("{}", s);
        return Ok(());
    }

    let sp = &out.speciation;
    println!("pCO2: {:.2} uatm", sp.pco2_uatm);
    println!("pH: {:.4}", sp.ph);
    println!("CO2: {:.3} umol/kg", sp.co2_umol_kg);
    println!("HCO3: {:.2} umol/kg", sp.hco3_umol_kg);
    println!("CO3: {:.2} umol/kg", sp.co3_umol_kg);

    if let Some(c) = &out.components {
        println!("H+: {:.6e} mol/kg", c.h_mol_kg);
        println!("B(OH)4: {:.2} umol/kg", c.boh4_umol_kg);
        println!("OH: {:.3} umol/kg", c.oh_umol_kg);
        println!(
            "Check DIC/Alk: {:.4} / {:.4} umol/kg",
            c.charge_balance.dic_umol_kg, c.charge_balance.alk_umol_kg
        );
    }

    Ok(())
}
