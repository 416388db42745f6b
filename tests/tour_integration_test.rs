use anyhow::Result;
use script_tour::adapters::{FixedClock, FixedRandom, MemoryConsole, SystemClock, SystemRandom};
use script_tour::core::runner::{CLOSING_BANNER, OPENING_BANNER};
use script_tour::domain::ports::GcHook;
use script_tour::{Host, Runner, Section, TomlConfig, TourError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn fixed_host(console: &MemoryConsole, samples: Vec<f64>) -> Result<Host> {
    let clock = FixedClock::from_ymd_hms(2024, 1, 15, 9, 30, 0)?;
    Ok(Host::new(
        Box::new(console.clone()),
        Box::new(clock),
        Box::new(FixedRandom::new(samples)),
    ))
}

fn settings(toml: &str) -> Result<TomlConfig> {
    Ok(TomlConfig::from_toml_str(toml)?)
}

fn run_fixed(toml: &str) -> Result<String> {
    let console = MemoryConsole::new();
    let mut runner = Runner::new(settings(toml)?, fixed_host(&console, vec![0.42])?);
    runner.run()?;
    Ok(console.output())
}

/// 完整執行所有區塊並檢查固定輸出
#[test]
fn test_full_tour_with_fixed_host() -> Result<()> {
    let console = MemoryConsole::new();
    let mut runner = Runner::new(
        settings("[performance]\niterations = 1000\n")?,
        fixed_host(&console, vec![0.42])?,
    );

    let summary = runner.run()?;
    assert_eq!(summary.sections, Section::ALL.to_vec());
    assert_eq!(summary.reported_total_ms, 0);

    let lines = console.lines();
    assert_eq!(lines[0], OPENING_BANNER);
    for section in Section::ALL {
        let heading = section.heading();
        assert!(
            console.output().contains(&heading),
            "missing heading {:?}",
            heading
        );
    }

    for expected in [
        "Integer: 42 (type: integer)",
        "Counter: 1, 2, 3",
        "After push: [apple, banana, orange, grape]",
        "After pop (removed grape): [apple, banana, orange]",
        "After unshift: [mango, apple, banana, orange]",
        "Doubled numbers: [2, 4, 6, 8, 10]",
        "Even numbers: [2, 4]",
        "Sum of numbers: 15",
        "Bound closure on another receiver: [reading, swimming, coding]",
        "Square root of 16: 4",
        "Caught error: Negative values not allowed",
        "Finally block executed",
        "  \"test@example.com\": Valid",
        "  \"invalid-email\": Invalid",
        "  \"555-0123\": Invalid",
        "Hidden: Call me at XXX-XXX-XXXX or 555-0123",
        "Tagged template: Hello **alice**, you have **admin** access!",
        "Parsed back - Active users: 2",
        "  random(): 0.42",
        "Performance test: 1000 iterations took 0ms",
        "Total execution time: 0ms",
    ] {
        assert!(console.contains_line(expected), "missing line {:?}", expected);
    }

    let closing = CLOSING_BANNER.trim_start();
    let closing_index = lines.iter().position(|line| line == closing).unwrap();
    assert_eq!(lines.len(), closing_index + 3);
    Ok(())
}

#[test]
fn test_fixed_host_runs_are_identical() -> Result<()> {
    let first = run_fixed("[performance]\niterations = 5000\n")?;
    let second = run_fixed("[performance]\niterations = 5000\n")?;
    assert_eq!(first, second);
    Ok(())
}

/// 不依賴時間與亂數的區塊在真實主機上也必須輸出一致
#[test]
fn test_deterministic_sections_repeat_on_system_host() -> Result<()> {
    let toml = r#"
[tour]
sections = ["variables", "control", "functions", "sequences", "objects", "errors", "patterns", "advanced"]
"#;

    let mut outputs = Vec::new();
    for _ in 0..2 {
        let console = MemoryConsole::new();
        let host = Host::new(
            Box::new(console.clone()),
            Box::new(SystemClock),
            Box::new(SystemRandom),
        );
        let summary = Runner::new(settings(toml)?, host).run()?;
        assert_eq!(summary.sections.len(), 8);

        // 最後的總時間行依賴時鐘，排除後比較
        let lines: Vec<String> = console
            .lines()
            .into_iter()
            .filter(|line| !line.starts_with("Total execution time"))
            .collect();
        outputs.push(lines);
    }

    assert_eq!(outputs[0], outputs[1]);
    Ok(())
}

#[test]
fn test_nondeterministic_samples_are_well_formed() -> Result<()> {
    let console = MemoryConsole::new();
    let host = Host::new(
        Box::new(console.clone()),
        Box::new(SystemClock),
        Box::new(SystemRandom),
    );
    let toml = "[tour]\nsections = [\"arithmetic\", \"date-time\"]\n";
    Runner::new(settings(toml)?, host).run()?;

    let random: f64 = console
        .lines()
        .iter()
        .find_map(|line| line.strip_prefix("  random(): ").map(str::to_string))
        .unwrap()
        .parse()?;
    assert!((0.0..1.0).contains(&random));

    let year = console
        .lines()
        .iter()
        .find_map(|line| line.strip_prefix("Year: ").map(str::to_string))
        .unwrap();
    assert_eq!(year.len(), 4);
    assert!(year.chars().all(|c| c.is_ascii_digit()));
    Ok(())
}

#[test]
fn test_sections_run_in_fixed_order() -> Result<()> {
    let output = run_fixed("[tour]\nsections = [\"json\", \"variables\"]\n")?;
    let variables = output.find("--- 1. Variables and Data Types ---").unwrap();
    let json = output.find("--- 12. JSON Operations ---").unwrap();
    assert!(variables < json);
    assert!(!output.contains("--- 2. Control Structures ---"));
    Ok(())
}

struct CountingGc {
    calls: Arc<AtomicUsize>,
}

impl GcHook for CountingGc {
    fn collect(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn test_gc_hook_reported_when_present() -> Result<()> {
    let calls = Arc::new(AtomicUsize::new(0));
    let console = MemoryConsole::new();
    let host = fixed_host(&console, vec![0.1])?.with_gc(Box::new(CountingGc {
        calls: calls.clone(),
    }));

    let toml = "[tour]\nsections = [\"performance\"]\n[performance]\niterations = 10\n";
    Runner::new(settings(toml)?, host).run()?;

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(console.contains_line("Garbage collection available"));
    assert!(console.contains_line("Garbage collection triggered"));
    Ok(())
}

#[test]
fn test_gc_lines_absent_without_hook() -> Result<()> {
    let output = run_fixed("[tour]\nsections = [\"performance\"]\n[performance]\niterations = 10\n")?;
    assert!(!output.contains("Garbage collection"));
    Ok(())
}

#[test]
fn test_block_failure_is_reported_and_stops_run() -> Result<()> {
    let console = MemoryConsole::new();
    let mut runner = Runner::new(settings("")?, fixed_host(&console, vec![])?);

    let result = runner.run();
    assert!(matches!(result, Err(TourError::EntropyError { .. })));

    let output = console.output();
    assert!(output.contains("[exception] Entropy source failed: no samples configured"));
    assert!(output.contains("--- 3. Mathematical Operations ---"));
    assert!(!output.contains("--- 4. Functions ---"));
    assert!(!output.contains(CLOSING_BANNER.trim_start()));
    Ok(())
}
