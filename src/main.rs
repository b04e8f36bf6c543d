use clap::Parser;
use std::io::{self, BufRead};
use std::process::ExitCode;

use intlnum::{NumberFormatter, RawOptions};

#[derive(Parser)]
#[command(name = "intlnum", version, about = "Locale-aware number formatting")]
struct Cli {
    /// Values to format; reads one value per line from stdin when omitted
    values: Vec<String>,

    /// BCP-47 locale tag
    #[arg(short, long, default_value = "en-US")]
    locale: String,

    /// decimal, percent, currency or unit
    #[arg(long)]
    style: Option<String>,

    /// ISO 4217 currency code (required with --style currency)
    #[arg(long)]
    currency: Option<String>,

    /// symbol, narrowSymbol, code or name
    #[arg(long)]
    currency_display: Option<String>,

    /// standard or accounting
    #[arg(long)]
    currency_sign: Option<String>,

    /// Sanctioned unit identifier, e.g. meter-per-second
    #[arg(long)]
    unit: Option<String>,

    /// short, narrow or long
    #[arg(long)]
    unit_display: Option<String>,

    /// standard, scientific, engineering or compact
    #[arg(long)]
    notation: Option<String>,

    /// short or long
    #[arg(long)]
    compact_display: Option<String>,

    /// auto, always, never, exceptZero or negative
    #[arg(long)]
    sign_display: Option<String>,

    /// auto, always, min2 or never
    #[arg(long)]
    use_grouping: Option<String>,

    /// ceil, floor, expand, trunc, halfCeil, halfFloor, halfExpand,
    /// halfTrunc or halfEven
    #[arg(long)]
    rounding_mode: Option<String>,

    /// Numbering system, e.g. beng or arab
    #[arg(long)]
    numbering_system: Option<String>,

    #[arg(long)]
    min_integer_digits: Option<u32>,
    #[arg(long)]
    min_fraction_digits: Option<u32>,
    #[arg(long)]
    max_fraction_digits: Option<u32>,
    #[arg(long)]
    min_significant_digits: Option<u32>,
    #[arg(long)]
    max_significant_digits: Option<u32>,

    /// Print typed parts instead of the joined string
    #[arg(long)]
    parts: bool,
}

impl Cli {
    fn options(&self) -> RawOptions {
        RawOptions {
            style: self.style.clone(),
            currency: self.currency.clone(),
            currency_display: self.currency_display.clone(),
            currency_sign: self.currency_sign.clone(),
            unit: self.unit.clone(),
            unit_display: self.unit_display.clone(),
            notation: self.notation.clone(),
            compact_display: self.compact_display.clone(),
            sign_display: self.sign_display.clone(),
            use_grouping: self.use_grouping.clone(),
            rounding_mode: self.rounding_mode.clone(),
            numbering_system: self.numbering_system.clone(),
            minimum_integer_digits: self.min_integer_digits,
            minimum_fraction_digits: self.min_fraction_digits,
            maximum_fraction_digits: self.max_fraction_digits,
            minimum_significant_digits: self.min_significant_digits,
            maximum_significant_digits: self.max_significant_digits,
            ..Default::default()
        }
    }
}

fn render(formatter: &NumberFormatter, input: &str, parts: bool) -> Result<String, String> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| format!("not a number: {input:?}"))?;
    if parts {
        let rendered = formatter
            .format_to_parts(value)
            .into_parts()
            .into_iter()
            .map(|p| format!("{:?}={:?}", p.kind, p.value))
            .collect::<Vec<_>>()
            .join(" ");
        Ok(rendered)
    } else {
        Ok(formatter.format(value))
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let formatter = match NumberFormatter::new(&cli.locale, cli.options()) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("intlnum: {e}");
            return ExitCode::from(1);
        }
    };

    let mut failed = false;
    let mut emit = |input: &str| match render(&formatter, input, cli.parts) {
        Ok(line) => println!("{line}"),
        Err(e) => {
            eprintln!("intlnum: {e}");
            failed = true;
        }
    };

    if cli.values.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) if line.trim().is_empty() => {}
                Ok(line) => emit(&line),
                Err(e) => {
                    eprintln!("intlnum: read error: {e}");
                    return ExitCode::from(1);
                }
            }
        }
    } else {
        for value in &cli.values {
            emit(value);
        }
    }

    if failed {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}
