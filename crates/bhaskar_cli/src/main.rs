//! Command-line front end. Every subcommand accepts its inputs either
//! as flags or, with `--stdin`, as one JSON request object on stdin;
//! the response is always a JSON envelope on stdout. A failed request
//! writes `{"success": false, "error": "..."}` and exits nonzero, so a
//! calling process can branch on either signal.

use std::io::Read;
use std::process::ExitCode;

use anyhow::{Context, bail};
use bhaskar_ephem::GeoLocation;
use bhaskar_jyotish::{
    ashta_koota_for_births, dasha_hierarchy_for_birth, dasha_snapshot_for_birth, kaal_sarp_dosha,
    kundali_at, mangal_dosha, panchang_for_date, vimshottari_config, yogini_config,
};
use bhaskar_time::LocalTime;
use bhaskar_vedic::AyanamshaSystem;
use clap::{Args, Parser, Subcommand};
use serde::Deserialize;
use serde_json::{Value, json};

#[derive(Parser)]
#[command(name = "bhaskar", about = "Vedic astrology computations over flags or JSON stdin")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Panchang for a date and place
    Panchang(PanchangArgs),
    /// Birth chart (lagna, graha placements, bhavas)
    Kundali(BirthArgs),
    /// Dasha periods from birth
    Dasha(DashaArgs),
    /// Mangal and Kaal Sarp dosha assessment
    Dosha(BirthArgs),
    /// Ashta koota marriage matching
    Match(MatchArgs),
}

/// A birth (or query) instant with its place.
#[derive(Debug, Deserialize)]
struct BirthInput {
    year: i32,
    month: u32,
    day: u32,
    #[serde(default)]
    hour: u32,
    #[serde(default)]
    minute: u32,
    #[serde(default)]
    second: f64,
    utc_offset_hours: f64,
    latitude: Option<f64>,
    longitude: Option<f64>,
}

impl BirthInput {
    fn to_jd(&self) -> anyhow::Result<f64> {
        let local = LocalTime::new(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
            self.utc_offset_hours,
        )?;
        Ok(local.to_jd())
    }

    fn location(&self) -> anyhow::Result<GeoLocation> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Ok(GeoLocation::new(lat, lon)),
            _ => bail!("latitude and longitude are required"),
        }
    }
}

fn parse_ayanamsha(name: Option<&str>) -> anyhow::Result<AyanamshaSystem> {
    match name {
        None => Ok(AyanamshaSystem::default()),
        Some(name) => AyanamshaSystem::from_name(name)
            .with_context(|| format!("unknown ayanamsha system: {name}")),
    }
}

fn read_stdin() -> anyhow::Result<String> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;
    Ok(input)
}

#[derive(Debug, Deserialize)]
struct PanchangRequest {
    year: i32,
    month: u32,
    day: u32,
    utc_offset_hours: f64,
    latitude: f64,
    longitude: f64,
    ayanamsha: Option<String>,
}

#[derive(Debug, Args)]
struct PanchangArgs {
    /// Read the request as one JSON object from stdin instead of flags
    #[arg(long)]
    stdin: bool,
    #[arg(long, required_unless_present = "stdin")]
    year: Option<i32>,
    #[arg(long, required_unless_present = "stdin")]
    month: Option<u32>,
    #[arg(long, required_unless_present = "stdin")]
    day: Option<u32>,
    /// Offset from UTC in hours, e.g. 5.5 for IST
    #[arg(long = "utc-offset", required_unless_present = "stdin")]
    utc_offset_hours: Option<f64>,
    #[arg(long = "lat", required_unless_present = "stdin")]
    latitude: Option<f64>,
    #[arg(long = "lon", required_unless_present = "stdin")]
    longitude: Option<f64>,
    /// Ayanamsha system (default Lahiri)
    #[arg(long)]
    ayanamsha: Option<String>,
}

impl PanchangArgs {
    fn request(&self) -> anyhow::Result<PanchangRequest> {
        if self.stdin {
            return serde_json::from_str(&read_stdin()?).context("invalid panchang request");
        }
        Ok(PanchangRequest {
            year: self.year.context("missing --year")?,
            month: self.month.context("missing --month")?,
            day: self.day.context("missing --day")?,
            utc_offset_hours: self.utc_offset_hours.context("missing --utc-offset")?,
            latitude: self.latitude.context("missing --lat")?,
            longitude: self.longitude.context("missing --lon")?,
            ayanamsha: self.ayanamsha.clone(),
        })
    }
}

fn run_panchang(req: &PanchangRequest) -> anyhow::Result<Value> {
    let system = parse_ayanamsha(req.ayanamsha.as_deref())?;
    let location = GeoLocation::new(req.latitude, req.longitude);
    let panchang = panchang_for_date(
        req.year,
        req.month,
        req.day,
        req.utc_offset_hours,
        &location,
        system,
    )?;
    Ok(serde_json::to_value(panchang)?)
}

#[derive(Debug, Deserialize)]
struct KundaliRequest {
    #[serde(flatten)]
    birth: BirthInput,
    ayanamsha: Option<String>,
}

#[derive(Debug, Args)]
struct BirthArgs {
    /// Read the request as one JSON object from stdin instead of flags
    #[arg(long)]
    stdin: bool,
    #[arg(long, required_unless_present = "stdin")]
    year: Option<i32>,
    #[arg(long, required_unless_present = "stdin")]
    month: Option<u32>,
    #[arg(long, required_unless_present = "stdin")]
    day: Option<u32>,
    #[arg(long, default_value_t = 0)]
    hour: u32,
    #[arg(long, default_value_t = 0)]
    minute: u32,
    #[arg(long, default_value_t = 0.0)]
    second: f64,
    /// Offset from UTC in hours, e.g. 5.5 for IST
    #[arg(long = "utc-offset", required_unless_present = "stdin")]
    utc_offset_hours: Option<f64>,
    #[arg(long = "lat", required_unless_present = "stdin")]
    latitude: Option<f64>,
    #[arg(long = "lon", required_unless_present = "stdin")]
    longitude: Option<f64>,
    /// Ayanamsha system (default Lahiri)
    #[arg(long)]
    ayanamsha: Option<String>,
}

impl BirthArgs {
    fn request(&self) -> anyhow::Result<KundaliRequest> {
        if self.stdin {
            return serde_json::from_str(&read_stdin()?).context("invalid request");
        }
        Ok(KundaliRequest {
            birth: BirthInput {
                year: self.year.context("missing --year")?,
                month: self.month.context("missing --month")?,
                day: self.day.context("missing --day")?,
                hour: self.hour,
                minute: self.minute,
                second: self.second,
                utc_offset_hours: self.utc_offset_hours.context("missing --utc-offset")?,
                latitude: self.latitude,
                longitude: self.longitude,
            },
            ayanamsha: self.ayanamsha.clone(),
        })
    }
}

fn run_kundali(req: &KundaliRequest) -> anyhow::Result<Value> {
    let system = parse_ayanamsha(req.ayanamsha.as_deref())?;
    let chart = kundali_at(req.birth.to_jd()?, &req.birth.location()?, system)?;
    Ok(serde_json::to_value(chart)?)
}

/// Instant for a dasha snapshot.
#[derive(Debug, Deserialize)]
struct AtInput {
    year: i32,
    month: u32,
    day: u32,
    #[serde(default)]
    hour: u32,
    #[serde(default)]
    minute: u32,
    utc_offset_hours: f64,
}

#[derive(Debug, Deserialize)]
struct DashaRequest {
    #[serde(flatten)]
    birth: BirthInput,
    ayanamsha: Option<String>,
    /// "vimshottari" (default) or "yogini".
    system: Option<String>,
    /// 0 = mahadashas, 1 = +antardashas, 2 = +pratyantardashas.
    levels: Option<u8>,
    /// When present, the running-period chain at this instant is
    /// included in the response.
    at: Option<AtInput>,
}

#[derive(Debug, Args)]
struct DashaArgs {
    #[command(flatten)]
    birth: BirthArgs,
    /// Dasha system: vimshottari (default) or yogini
    #[arg(long)]
    system: Option<String>,
    /// 0 = mahadashas, 1 = +antardashas, 2 = +pratyantardashas
    #[arg(long)]
    levels: Option<u8>,
    /// Include the running-period chain at this date (YYYY-MM-DD,
    /// birth UTC offset)
    #[arg(long = "at-year")]
    at_year: Option<i32>,
    #[arg(long = "at-month")]
    at_month: Option<u32>,
    #[arg(long = "at-day")]
    at_day: Option<u32>,
}

impl DashaArgs {
    fn request(&self) -> anyhow::Result<DashaRequest> {
        if self.birth.stdin {
            return serde_json::from_str(&read_stdin()?).context("invalid dasha request");
        }
        let kundali = self.birth.request()?;
        let at = match (self.at_year, self.at_month, self.at_day) {
            (None, None, None) => None,
            (Some(year), Some(month), Some(day)) => Some(AtInput {
                year,
                month,
                day,
                hour: 0,
                minute: 0,
                utc_offset_hours: kundali.birth.utc_offset_hours,
            }),
            _ => bail!("--at-year, --at-month and --at-day must be given together"),
        };
        Ok(DashaRequest {
            birth: kundali.birth,
            ayanamsha: kundali.ayanamsha,
            system: self.system.clone(),
            levels: self.levels,
            at,
        })
    }
}

fn run_dasha(req: &DashaRequest) -> anyhow::Result<Value> {
    let ayanamsha = parse_ayanamsha(req.ayanamsha.as_deref())?;
    let config = match req.system.as_deref().unwrap_or("vimshottari") {
        s if s.eq_ignore_ascii_case("vimshottari") => vimshottari_config(),
        s if s.eq_ignore_ascii_case("yogini") => yogini_config(),
        other => bail!("unknown dasha system: {other}"),
    };
    let levels = req.levels.unwrap_or(1).min(2);
    let birth_jd = req.birth.to_jd()?;
    let periods = dasha_hierarchy_for_birth(&config, birth_jd, ayanamsha, levels)?;

    let mut response = json!({
        "system": config.system_name,
        "periods": periods,
    });
    if let Some(at) = &req.at {
        let at_jd = LocalTime::new(
            at.year,
            at.month,
            at.day,
            at.hour,
            at.minute,
            0.0,
            at.utc_offset_hours,
        )?
        .to_jd();
        let snapshot = dasha_snapshot_for_birth(&config, birth_jd, at_jd, ayanamsha, levels)?;
        response["current"] = serde_json::to_value(snapshot)?;
    }
    Ok(response)
}

fn run_dosha(req: &KundaliRequest) -> anyhow::Result<Value> {
    let system = parse_ayanamsha(req.ayanamsha.as_deref())?;
    let chart = kundali_at(req.birth.to_jd()?, &req.birth.location()?, system)?;
    let mangal = mangal_dosha(&chart)?;
    let kaal_sarp = kaal_sarp_dosha(&chart)?;
    Ok(json!({
        "mangal_dosha": mangal,
        "kaal_sarp_dosha": kaal_sarp,
    }))
}

#[derive(Debug, Deserialize)]
struct MatchRequest {
    groom: BirthInput,
    bride: BirthInput,
    ayanamsha: Option<String>,
}

#[derive(Debug, Args)]
struct MatchArgs {
    /// Read the request as one JSON object from stdin instead of flags
    #[arg(long)]
    stdin: bool,
    #[arg(long = "groom-year", required_unless_present = "stdin")]
    groom_year: Option<i32>,
    #[arg(long = "groom-month", required_unless_present = "stdin")]
    groom_month: Option<u32>,
    #[arg(long = "groom-day", required_unless_present = "stdin")]
    groom_day: Option<u32>,
    #[arg(long = "groom-hour", default_value_t = 0)]
    groom_hour: u32,
    #[arg(long = "groom-minute", default_value_t = 0)]
    groom_minute: u32,
    #[arg(long = "groom-utc-offset", required_unless_present = "stdin")]
    groom_utc_offset_hours: Option<f64>,
    #[arg(long = "bride-year", required_unless_present = "stdin")]
    bride_year: Option<i32>,
    #[arg(long = "bride-month", required_unless_present = "stdin")]
    bride_month: Option<u32>,
    #[arg(long = "bride-day", required_unless_present = "stdin")]
    bride_day: Option<u32>,
    #[arg(long = "bride-hour", default_value_t = 0)]
    bride_hour: u32,
    #[arg(long = "bride-minute", default_value_t = 0)]
    bride_minute: u32,
    #[arg(long = "bride-utc-offset", required_unless_present = "stdin")]
    bride_utc_offset_hours: Option<f64>,
    /// Ayanamsha system (default Lahiri)
    #[arg(long)]
    ayanamsha: Option<String>,
}

impl MatchArgs {
    fn request(&self) -> anyhow::Result<MatchRequest> {
        if self.stdin {
            return serde_json::from_str(&read_stdin()?).context("invalid match request");
        }
        let person = |label: &'static str,
                      year: Option<i32>,
                      month: Option<u32>,
                      day: Option<u32>,
                      hour: u32,
                      minute: u32,
                      offset: Option<f64>|
         -> anyhow::Result<BirthInput> {
            Ok(BirthInput {
                year: year.with_context(|| format!("missing --{label}-year"))?,
                month: month.with_context(|| format!("missing --{label}-month"))?,
                day: day.with_context(|| format!("missing --{label}-day"))?,
                hour,
                minute,
                second: 0.0,
                utc_offset_hours: offset
                    .with_context(|| format!("missing --{label}-utc-offset"))?,
                latitude: None,
                longitude: None,
            })
        };
        Ok(MatchRequest {
            groom: person(
                "groom",
                self.groom_year,
                self.groom_month,
                self.groom_day,
                self.groom_hour,
                self.groom_minute,
                self.groom_utc_offset_hours,
            )?,
            bride: person(
                "bride",
                self.bride_year,
                self.bride_month,
                self.bride_day,
                self.bride_hour,
                self.bride_minute,
                self.bride_utc_offset_hours,
            )?,
            ayanamsha: self.ayanamsha.clone(),
        })
    }
}

fn run_match(req: &MatchRequest) -> anyhow::Result<Value> {
    let system = parse_ayanamsha(req.ayanamsha.as_deref())?;
    let report = ashta_koota_for_births(req.groom.to_jd()?, req.bride.to_jd()?, system)?;
    Ok(serde_json::to_value(report)?)
}

fn run(command: &Commands) -> anyhow::Result<Value> {
    match command {
        Commands::Panchang(args) => run_panchang(&args.request()?),
        Commands::Kundali(args) => run_kundali(&args.request()?),
        Commands::Dasha(args) => run_dasha(&args.request()?),
        Commands::Dosha(args) => run_dosha(&args.request()?),
        Commands::Match(args) => run_match(&args.request()?),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli.command) {
        Ok(data) => {
            let envelope = json!({ "success": true, "data": data });
            println!("{envelope}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "request failed");
            let envelope = json!({ "success": false, "error": format!("{err:#}") });
            println!("{envelope}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("args should parse")
    }

    #[test]
    fn panchang_request_round_trip() {
        let input = r#"{
            "year": 2024, "month": 3, "day": 20,
            "utc_offset_hours": 5.5,
            "latitude": 28.6139, "longitude": 77.2090
        }"#;
        let req: PanchangRequest = serde_json::from_str(input).unwrap();
        let data = run_panchang(&req).unwrap();
        assert!(data["tithi"]["name"].is_string());
        assert!(data["vaar"]["vaar"].is_string());
        assert!(data["sunrise"].is_string());
    }

    #[test]
    fn panchang_flags_build_the_same_request() {
        let cli = parse(&[
            "bhaskar", "panchang", "--year", "2024", "--month", "3", "--day", "20",
            "--utc-offset", "5.5", "--lat", "28.6139", "--lon", "77.2090",
        ]);
        let Commands::Panchang(args) = &cli.command else {
            panic!("expected panchang");
        };
        let req = args.request().unwrap();
        assert_eq!(req.year, 2024);
        assert_eq!(req.month, 3);
        assert!((req.utc_offset_hours - 5.5).abs() < 1e-12);
        let data = run_panchang(&req).unwrap();
        assert!(data["tithi"]["name"].is_string());
    }

    #[test]
    fn panchang_flags_are_required_without_stdin() {
        assert!(Cli::try_parse_from(["bhaskar", "panchang"]).is_err());
        assert!(Cli::try_parse_from(["bhaskar", "panchang", "--stdin"]).is_ok());
        assert!(Cli::try_parse_from(["bhaskar", "panchang", "--year", "2024"]).is_err());
    }

    #[test]
    fn kundali_request_round_trip() {
        let input = r#"{
            "year": 1995, "month": 4, "day": 12,
            "hour": 6, "minute": 30,
            "utc_offset_hours": 5.5,
            "latitude": 28.6139, "longitude": 77.2090,
            "ayanamsha": "lahiri"
        }"#;
        let req: KundaliRequest = serde_json::from_str(input).unwrap();
        let data = run_kundali(&req).unwrap();
        assert_eq!(data["grahas"].as_array().unwrap().len(), 9);
    }

    #[test]
    fn kundali_requires_a_location() {
        let input = r#"{
            "year": 1995, "month": 4, "day": 12,
            "utc_offset_hours": 5.5
        }"#;
        let req: KundaliRequest = serde_json::from_str(input).unwrap();
        assert!(run_kundali(&req).is_err());
    }

    #[test]
    fn dasha_request_with_snapshot() {
        let input = r#"{
            "year": 1995, "month": 4, "day": 12,
            "hour": 6, "minute": 30,
            "utc_offset_hours": 5.5,
            "latitude": 28.6139, "longitude": 77.2090,
            "system": "yogini", "levels": 1,
            "at": {"year": 2024, "month": 1, "day": 1, "utc_offset_hours": 5.5}
        }"#;
        let req: DashaRequest = serde_json::from_str(input).unwrap();
        let data = run_dasha(&req).unwrap();
        assert_eq!(data["system"], "Yogini");
        assert!(!data["periods"].as_array().unwrap().is_empty());
        assert!(!data["current"]["chain"].as_array().unwrap().is_empty());
    }

    #[test]
    fn dasha_at_flags_must_be_complete() {
        let cli = parse(&[
            "bhaskar", "dasha", "--year", "1995", "--month", "4", "--day", "12",
            "--utc-offset", "5.5", "--at-year", "2024",
        ]);
        let Commands::Dasha(args) = &cli.command else {
            panic!("expected dasha");
        };
        assert!(args.request().is_err());
    }

    #[test]
    fn match_request_round_trip() {
        let input = r#"{
            "groom": {"year": 1995, "month": 4, "day": 12, "hour": 6, "minute": 30,
                      "utc_offset_hours": 5.5, "latitude": 28.6139, "longitude": 77.2090},
            "bride": {"year": 1997, "month": 9, "day": 3, "hour": 21, "minute": 15,
                      "utc_offset_hours": 5.5, "latitude": 19.0760, "longitude": 72.8777}
        }"#;
        let req: MatchRequest = serde_json::from_str(input).unwrap();
        let data = run_match(&req).unwrap();
        assert_eq!(data["kutas"].as_array().unwrap().len(), 8);
        assert!(data["total"].as_f64().unwrap() <= 36.0);
    }

    #[test]
    fn match_flags_need_no_location() {
        // The kutas depend only on the Moon, so birth place is optional
        let cli = parse(&[
            "bhaskar", "match",
            "--groom-year", "1995", "--groom-month", "4", "--groom-day", "12",
            "--groom-utc-offset", "5.5",
            "--bride-year", "1997", "--bride-month", "9", "--bride-day", "3",
            "--bride-utc-offset", "5.5",
        ]);
        let Commands::Match(args) = &cli.command else {
            panic!("expected match");
        };
        let data = run_match(&args.request().unwrap()).unwrap();
        assert_eq!(data["kutas"].as_array().unwrap().len(), 8);
    }

    #[test]
    fn unknown_ayanamsha_is_rejected() {
        let input = r#"{
            "year": 2024, "month": 3, "day": 20,
            "utc_offset_hours": 5.5,
            "latitude": 28.6139, "longitude": 77.2090,
            "ayanamsha": "tropical"
        }"#;
        let req: PanchangRequest = serde_json::from_str(input).unwrap();
        assert!(run_panchang(&req).is_err());
    }

    #[test]
    fn invalid_date_is_an_error_envelope_case() {
        // Month 13 must surface as Err, not a silently shifted date
        let input = r#"{
            "year": 2024, "month": 13, "day": 20,
            "utc_offset_hours": 5.5,
            "latitude": 28.6139, "longitude": 77.2090
        }"#;
        let req: PanchangRequest = serde_json::from_str(input).unwrap();
        assert!(run_panchang(&req).is_err());
    }
}
