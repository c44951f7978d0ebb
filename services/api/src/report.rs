use clap::Args;
use guna_milan::error::AppError;
use guna_milan::matching::tables::{ALL_NAKSHATRAS, ALL_SIGNS};
use guna_milan::matching::{
    AshtaKootaEngine, CompatibilityReport, CompatibilityRequest, PersonInput,
};

#[derive(Args, Debug)]
pub(crate) struct MatchArgs {
    /// Bride's Moon sign (e.g. Cancer)
    #[arg(long)]
    pub(crate) bride_sign: String,
    /// Bride's nakshatra (e.g. "Purva Phalguni")
    #[arg(long)]
    pub(crate) bride_nakshatra: String,
    /// Groom's Moon sign
    #[arg(long)]
    pub(crate) groom_sign: String,
    /// Groom's nakshatra
    #[arg(long)]
    pub(crate) groom_nakshatra: String,
    /// Print the report as JSON instead of a table
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_match(args: MatchArgs) -> Result<(), AppError> {
    let MatchArgs {
        bride_sign,
        bride_nakshatra,
        groom_sign,
        groom_nakshatra,
        json,
    } = args;

    let request = CompatibilityRequest::new(
        PersonInput::new(bride_sign, bride_nakshatra),
        PersonInput::new(groom_sign, groom_nakshatra),
    );
    let report = AshtaKootaEngine::new().evaluate(&request)?;

    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(body) => println!("{body}"),
            Err(err) => println!("report payload unavailable: {err}"),
        }
    } else {
        print!("{}", render_report(&request, &report));
    }
    Ok(())
}

pub(crate) fn render_report(request: &CompatibilityRequest, report: &CompatibilityReport) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Ashta-Koota match: bride {} / {} | groom {} / {}\n",
        request.bride.moon_sign,
        request.bride.nakshatra,
        request.groom.moon_sign,
        request.groom.nakshatra
    ));
    for score in report.scores() {
        out.push_str(&format!(
            "  {:<13} {} / {}\n",
            score.koota.label(),
            score.points,
            score.koota.max_points()
        ));
    }
    out.push_str(&format!(
        "Total: {} / {} -> {}\n",
        report.total_gunas, report.max_gunas, report.verdict
    ));
    out
}

pub(crate) fn run_vocabulary() {
    println!("Moon signs:");
    for sign in ALL_SIGNS {
        println!(
            "  {:>2}. {:<12} varna={:<10} lord={}",
            sign.index() + 1,
            sign.name(),
            sign.varna().name(),
            sign.lord()
        );
    }

    println!("Nakshatras:");
    for nakshatra in ALL_NAKSHATRAS {
        println!(
            "  {:>2}. {:<18} gana={:<9} yoni={:<9} nadi={}",
            nakshatra.index() + 1,
            nakshatra.name(),
            nakshatra.gana().name(),
            nakshatra.yoni().name(),
            nakshatra.nadi().name()
        );
    }
}
