use console::Style;
use phrasegen::{GenerationResult, PassphraseConfig, StrengthLevel};
use std::time::Duration;

pub const METER_WIDTH: usize = 10;

pub struct RunInfo {
    pub base_words: usize,
    pub custom_words: usize,
    pub seeded: bool,
    pub seed_layers: usize,
}

pub struct DisplayOptions {
    pub unicode_support: bool,
    pub color_support: bool,
    pub quiet: bool,
}

pub fn detect_unicode_support() -> bool {
    supports_unicode::on(supports_unicode::Stream::Stdout)
}

pub fn detect_color_support() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

pub fn get_status_symbols(unicode_support: bool) -> (&'static str, &'static str) {
    if unicode_support {
        ("✓", "!")
    } else {
        ("+", "!")
    }
}

fn branches(unicode_support: bool) -> (&'static str, &'static str) {
    if unicode_support {
        ("├─", "└─")
    } else {
        ("|-", "`-")
    }
}

fn plural(count: usize, one: &'static str, many: &'static str) -> &'static str {
    if count == 1 { one } else { many }
}

pub fn level_style(level: StrengthLevel, color_support: bool) -> Style {
    if !color_support {
        return Style::new();
    }

    match level {
        StrengthLevel::Weak => Style::new().red(),
        StrengthLevel::Fair | StrengthLevel::Good => Style::new().yellow(),
        StrengthLevel::Strong => Style::new().green(),
        StrengthLevel::VeryStrong => Style::new().blue(),
    }
}

pub fn render_meter(progress: f64, unicode_support: bool) -> String {
    let filled = (progress.clamp(0.0, 1.0) * METER_WIDTH as f64).round() as usize;
    let (full, empty) = if unicode_support {
        ("█", "░")
    } else {
        ("#", "-")
    };
    format!(
        "[{}{}]",
        full.repeat(filled),
        empty.repeat(METER_WIDTH - filled)
    )
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}

pub fn display_output(
    index: usize,
    result: &GenerationResult,
    config: &PassphraseConfig,
    info: &RunInfo,
    options: &DisplayOptions,
) {
    if options.quiet {
        println!("{}", result.passphrase.as_str());
        return;
    }

    match result.strength {
        Some(_) => println!("Out[{}]:\n{}\n", index, result.passphrase.as_str()),
        None => {
            println!("Out[{}]:\n(no words available)\n", index);
            return;
        }
    }

    if index == 0 {
        display_settings(config, info, options);
    }
    display_stats(result, options);
}

pub fn display_settings(config: &PassphraseConfig, info: &RunInfo, options: &DisplayOptions) {
    let (mid, last) = branches(options.unicode_support);
    let (check_ok, check_warn) = get_status_symbols(options.unicode_support);

    let words_safe = config.word_count() >= 4;
    let words_style = if options.color_support {
        if words_safe {
            Style::new().green()
        } else {
            Style::new().yellow()
        }
    } else {
        Style::new()
    };
    let words_status = if words_safe { check_ok } else { check_warn };

    println!("Settings:");

    println!(
        "  {} Words      {} {} {}",
        mid,
        words_style.apply_to(format!("[{}]", words_status)),
        words_style.apply_to(config.word_count()),
        plural(config.word_count(), "word", "words")
    );
    println!("  {} Separator  {}", mid, config.separator_kind());
    println!("  {} Case       {}", mid, config.capitalization_kind());
    println!("  {} Numbers    {}", mid, on_off(config.numbers()));
    println!("  {} Symbols    {}", mid, on_off(config.symbols()));
    println!(
        "  {} Catalog    {} base + {} custom {}",
        mid,
        info.base_words,
        info.custom_words,
        plural(info.custom_words, "word", "words")
    );

    if info.seeded {
        println!(
            "  {} Source     ChaCha20 keystream ({} seed {})",
            last,
            info.seed_layers,
            plural(info.seed_layers, "layer", "layers")
        );
    } else {
        println!("  {} Source     Thread RNG (OS seeded)", last);
    }

    println!();
}

pub fn display_stats(result: &GenerationResult, options: &DisplayOptions) {
    let Some(report) = result.strength else {
        return;
    };

    let (mid, last) = branches(options.unicode_support);
    let (check_ok, check_warn) = get_status_symbols(options.unicode_support);
    let style = level_style(report.level, options.color_support);
    let status = if report.level >= StrengthLevel::Good {
        check_ok
    } else {
        check_warn
    };

    println!("Stats:");
    println!(
        "  {} Length     {} {}",
        mid,
        report.analysis.length,
        plural(report.analysis.length, "char", "chars")
    );
    println!(
        "  {} Segments   {} {}",
        mid,
        report.analysis.word_segments,
        plural(report.analysis.word_segments, "word", "words")
    );
    println!(
        "  {} Score      {}/{} {}",
        mid,
        style.apply_to(report.score),
        phrasegen::strength::MAX_SCORE,
        style.apply_to(render_meter(
            report.level.progress(),
            options.unicode_support
        ))
    );
    println!(
        "  {} Crack time {}",
        last,
        style.apply_to(report.crack_time())
    );

    println!(
        "\n{} Strength: {}\n",
        style.apply_to(format!("[{}]", status)),
        style.apply_to(report.level)
    );
}

pub fn display_elapsed(count: usize, elapsed: Duration, options: &DisplayOptions) {
    if options.quiet {
        return;
    }
    println!(
        "Generated {} {} in {:.3}ms",
        count,
        plural(count, "passphrase", "passphrases"),
        elapsed.as_secs_f64() * 1000.0
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_status_symbols_unicode() {
        let (ok, warn) = get_status_symbols(true);
        assert_eq!(ok, "✓");
        assert_eq!(warn, "!");
    }

    #[test]
    fn test_get_status_symbols_ascii() {
        let (ok, warn) = get_status_symbols(false);
        assert_eq!(ok, "+");
        assert_eq!(warn, "!");
    }

    #[test]
    fn test_meter_fill() {
        assert_eq!(render_meter(0.2, false), "[##--------]");
        assert_eq!(render_meter(0.8, false), "[########--]");
        assert_eq!(render_meter(1.0, false), "[##########]");
        assert_eq!(render_meter(1.7, false), "[##########]");
        assert_eq!(render_meter(-1.0, false), "[----------]");
    }

    #[test]
    fn test_meter_unicode_width() {
        let meter = render_meter(StrengthLevel::Good.progress(), true);
        assert_eq!(meter.chars().count(), METER_WIDTH + 2);
        assert_eq!(meter.chars().filter(|c| *c == '█').count(), 6);
    }

    #[test]
    fn test_plural() {
        assert_eq!(plural(1, "word", "words"), "word");
        assert_eq!(plural(0, "word", "words"), "words");
        assert_eq!(plural(7, "word", "words"), "words");
    }

    #[test]
    fn test_plain_style_without_color() {
        let style = level_style(StrengthLevel::Weak, false);
        assert_eq!(style.apply_to("Weak").to_string(), "Weak");
    }
}
