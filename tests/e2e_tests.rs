//! End-to-end integration tests
//!
//! These tests validate the complete settlement pipeline using predefined
//! CSV test fixtures. Each test:
//! 1. Reads input.csv from a fixture directory
//! 2. Reconciles and settles all expense rows
//! 3. Generates the settlement report
//! 4. Compares actual output with expected.txt
//!
//! Test fixtures are located in tests/fixtures/ and cover:
//! - The canonical two-row scenario
//! - Remainder-dropping splits
//! - Debt chains collapsing to a single transfer
//! - Mutually cancelling rows and empty input
//!
//! Each fixture is run twice: once with the synchronous reader and once with
//! the async reader.

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use rust_settlement_engine::cli::StrategyType;
    use rust_settlement_engine::strategy::create_strategy;
    use std::fs;
    use std::path::Path;

    /// Run a test fixture by processing input.csv and comparing with expected.txt
    ///
    /// # Arguments
    ///
    /// * `fixture_name` - Name of the fixture directory (e.g., "happy_path")
    /// * `strategy_type` - Ingestion strategy to use (Sync or Async)
    ///
    /// # Panics
    ///
    /// Panics if:
    /// - Input or expected files cannot be read
    /// - Output doesn't match expected
    fn run_test_fixture(fixture_name: &str, strategy_type: StrategyType) {
        // Construct paths to fixture files
        let fixture_dir = format!("tests/fixtures/{}", fixture_name);
        let input_path = format!("{}/input.csv", fixture_dir);
        let expected_path = format!("{}/expected.txt", fixture_dir);

        // Verify fixture files exist
        assert!(
            Path::new(&input_path).exists(),
            "Input file not found: {}",
            input_path
        );
        assert!(
            Path::new(&expected_path).exists(),
            "Expected file not found: {}",
            expected_path
        );

        // Create processing strategy
        let strategy = create_strategy(strategy_type.clone(), false);

        // Process all expense rows using the selected strategy
        let mut output = Vec::new();
        strategy
            .process(Path::new(&input_path), &mut output)
            .unwrap_or_else(|e| panic!("Failed to process expenses: {}", e));

        let actual_output = String::from_utf8(output).expect("Report was not valid UTF-8");

        // Read expected output
        let expected_output = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("Failed to read expected file {}: {}", expected_path, e));

        assert_eq!(
            actual_output, expected_output,
            "\n\nOutput mismatch for fixture: {} (strategy: {:?})\n\nActual output:\n{}\n\nExpected output:\n{}\n",
            fixture_name, strategy_type, actual_output, expected_output
        );
    }

    /// End-to-end test for all fixtures with both ingestion strategies
    #[rstest]
    #[case("happy_path")]
    #[case("single_beneficiary")]
    #[case("remainder_drop")]
    #[case("debt_chain")]
    #[case("mutual_wash")]
    #[case("multi_group")]
    #[case("empty_input")]
    fn test_fixtures(
        #[case] fixture: &str,
        #[values(StrategyType::Sync, StrategyType::Async)] strategy: StrategyType,
    ) {
        run_test_fixture(fixture, strategy);
    }

    /// Malformed rows abort processing under both strategies
    #[rstest]
    fn test_malformed_row_aborts(
        #[values(StrategyType::Sync, StrategyType::Async)] strategy: StrategyType,
    ) {
        let input_path = Path::new("tests/fixtures/malformed_amount/input.csv");
        assert!(input_path.exists());

        let strategy = create_strategy(strategy, false);
        let mut output = Vec::new();

        let result = strategy.process(input_path, &mut output);
        assert!(result.is_err());
        assert!(output.is_empty());
    }
}
