use crate::cli::DescribeArgs;
use crate::data;
use crate::error::{CliError, Result};
use pepsift::core::chem::descriptors::DescriptorSet;
use pepsift::core::seq::normalize::clean_sequence;
use pepsift::engine::context::SessionContext;
use serde::Serialize;

#[derive(Serialize)]
struct RecordReport<'a> {
    header: &'a str,
    sequence: &'a str,
    descriptors: DescriptorSet,
}

pub fn run(args: DescribeArgs) -> Result<()> {
    if let Some(sequence) = &args.sequence {
        let clean = clean_sequence(sequence);
        let set = DescriptorSet::compute(&clean);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&set)?);
        } else {
            print_report(&clean, &set);
        }
        return Ok(());
    }

    let Some(input) = &args.input else {
        return Err(CliError::Config(
            "either --sequence or --input is required".to_string(),
        ));
    };
    let records = data::load_collection(input)?;
    let mut context = SessionContext::from_records(records);
    let records = context.collection().to_vec();

    if args.json {
        let reports: Vec<RecordReport> = records
            .iter()
            .map(|record| RecordReport {
                header: &record.header,
                sequence: &record.sequence,
                descriptors: context.descriptors_for(&record.sequence),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for record in &records {
            let set = context.descriptors_for(&record.sequence);
            println!("{}\t{}", record.header, compact_line(&set));
        }
    }
    Ok(())
}

fn print_report(sequence: &str, set: &DescriptorSet) {
    let shown = if sequence.is_empty() {
        "(empty)"
    } else {
        sequence
    };
    println!("Sequence: {shown}");
    println!("  Length:             {}", set.length);
    println!("  Net charge (pH 7):  {}", set.charge);
    println!("  Isoelectric point:  {:.1}", set.isoelectric_point);
    println!("  Hydrophobicity:     {:.2}%", set.hydrophobicity);
    println!("  Boman index:        {:.2}", set.boman_index);
    println!("  Hydrophobic moment: {:.2}%", set.hydrophobic_moment_ratio);
}

fn compact_line(set: &DescriptorSet) -> String {
    format!(
        "len={} charge={} pI={:.1} hydro={:.2}% boman={:.2} moment={:.2}%",
        set.length,
        set.charge,
        set.isoelectric_point,
        set.hydrophobicity,
        set.boman_index,
        set.hydrophobic_moment_ratio
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn single_sequence_report_succeeds() {
        let args = DescribeArgs {
            sequence: Some("KLAKLAK".to_string()),
            input: None,
            json: false,
        };
        assert!(run(args).is_ok());
    }

    #[test]
    fn json_report_of_a_collection_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("collection.fasta");
        std::fs::write(&path, ">a\nKLAKLAK\n>b\nDDDD\n").unwrap();

        let args = DescribeArgs {
            sequence: None,
            input: Some(path),
            json: true,
        };
        assert!(run(args).is_ok());
    }

    #[test]
    fn missing_target_is_a_configuration_error() {
        let args = DescribeArgs {
            sequence: None,
            input: None,
            json: false,
        };
        assert!(matches!(run(args), Err(CliError::Config(_))));
    }

    #[test]
    fn missing_input_file_propagates() {
        let args = DescribeArgs {
            sequence: None,
            input: Some(PathBuf::from("/definitely/absent.fasta")),
            json: false,
        };
        assert!(run(args).is_err());
    }

    #[test]
    fn compact_line_formats_all_descriptors() {
        let set = DescriptorSet::compute("KLAKLAK");
        let line = compact_line(&set);
        assert!(line.contains("len=7"));
        assert!(line.contains("charge=3"));
        assert!(line.contains('%'));
    }
}
