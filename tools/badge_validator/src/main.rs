use qlx_core::badge::verify_url::parse_verification_url;
use qlx_core::report::render::render_verification_markdown;
use qlx_core::verifier::{is_canonical_proof_id, verify_badge};

fn main() {
    // badge_validator re-runs the acceptance checks against a presented
    // badge id (or a full verification URL) and prints the report as JSON
    // plus a markdown card. Exit 0 on valid, 1 on not valid, 2 on usage.
    let args: Vec<String> = std::env::args().collect();

    let (badge_id, expected_digest) = match parse_args(&args) {
        Some(parsed) => parsed,
        None => {
            eprintln!("usage: badge_validator <badge_id> [expected_digest]");
            eprintln!("       badge_validator --url <verification_url>");
            std::process::exit(2);
        }
    };

    match is_canonical_proof_id(&badge_id) {
        Ok(true) => {}
        Ok(false) => eprintln!("note: '{}' is not a canonical badge id", badge_id),
        Err(e) => {
            eprintln!("badge_validator error: {}", e);
            std::process::exit(2);
        }
    }

    let report = verify_badge(&badge_id, expected_digest.as_deref());
    println!(
        "{}",
        serde_json::to_string_pretty(&report).expect("serialize report")
    );
    println!();
    println!("{}", render_verification_markdown(&report));
    println!(
        "BADGE_VALIDATOR overall={} confidence={}",
        if report.valid { "PASS" } else { "FAIL" },
        report.confidence
    );

    if report.valid {
        std::process::exit(0);
    }
    std::process::exit(1);
}

fn parse_args(args: &[String]) -> Option<(String, Option<String>)> {
    match args.get(1).map(String::as_str) {
        Some("--url") => {
            let raw = args.get(2)?;
            match parse_verification_url(raw) {
                Ok(parsed) => Some(parsed),
                Err(e) => {
                    eprintln!("badge_validator error: {}", e);
                    None
                }
            }
        }
        Some(badge_id) => Some((badge_id.to_string(), args.get(2).cloned())),
        None => None,
    }
}
