//! Report Writer Module
//! Renders the analysis stages as plain text, in fixed order.

use crate::data::Datasets;
use crate::report::analysis::{
    accuracy_trend, AccuracyPoint, AnalysisError, GapAnalysis, PntSummary, TwinPrimeAnalysis,
};
use crate::report::format::{fixed, grouped};
use std::io::{self, Write};
use thiserror::Error;
use tracing::info;

const TITLE: &str = "PRIME NUMBER THEOREM - COMPUTATIONAL VERIFICATION";
const SECTION_RULE_WIDTH: usize = 55;
const TABLE_RULE_WIDTH: usize = 65;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
    #[error("analysis failed: {0}")]
    Analysis(#[from] AnalysisError),
}

/// Writes the verification report to any byte sink.
pub struct ReportWriter<W: Write> {
    out: W,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write the whole report. Stages run in order; the first failure stops
    /// the run with whatever has been written so far left in place.
    pub fn write_report(&mut self, data: &Datasets) -> Result<(), ReportError> {
        self.write_header(data)?;

        info!("stage 1: prime number theorem verification");
        self.write_pnt_summary(&PntSummary::compute(&data.counting_function)?)?;

        info!("stage 2: prime gap statistics");
        self.write_gap_analysis(&GapAnalysis::compute(&data.gaps)?)?;

        info!("stage 3: approximation accuracy trends");
        self.write_accuracy_trend(&accuracy_trend(&data.counting_function))?;

        info!("stage 4: twin primes");
        self.write_twin_primes(&TwinPrimeAnalysis::compute(&data.properties)?)?;

        self.write_conclusion()?;
        self.out.flush()?;
        Ok(())
    }

    fn rule(&mut self, ch: char, width: usize) -> io::Result<()> {
        writeln!(self.out, "{}", ch.to_string().repeat(width))
    }

    fn section(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.out)?;
        self.rule('=', SECTION_RULE_WIDTH)?;
        writeln!(self.out, "{title}")?;
        self.rule('=', SECTION_RULE_WIDTH)
    }

    pub fn write_header(&mut self, data: &Datasets) -> io::Result<()> {
        writeln!(self.out, "{TITLE}")?;
        self.rule('=', SECTION_RULE_WIDTH)?;

        writeln!(self.out, "\nDatasets loaded successfully:")?;
        writeln!(
            self.out,
            "- Prime counting function: {} points",
            data.counting_function.len()
        )?;
        writeln!(self.out, "- Prime gaps analysis: {} gaps", data.gaps.len())?;
        writeln!(self.out, "- Dense sampling: {} points", data.dense.row_count)?;
        writeln!(
            self.out,
            "- Prime properties: {} primes",
            data.properties.len()
        )
    }

    pub fn write_pnt_summary(&mut self, summary: &PntSummary) -> io::Result<()> {
        let row = &summary.sample;
        self.section("ANALYSIS 1: PRIME NUMBER THEOREM VERIFICATION")?;

        writeln!(self.out, "\nAt x = {}:", grouped(row.x, 0))?;
        writeln!(self.out, "  Actual π(x) = {}", grouped(row.pi_x, 0))?;
        writeln!(
            self.out,
            "  PNT estimate x/ln(x) = {}",
            grouped(row.pnt_approximation, 1)
        )?;
        writeln!(
            self.out,
            "  Better estimate li(x) = {}",
            grouped(row.li_approximation, 1)
        )?;
        writeln!(
            self.out,
            "  PNT relative error: {}",
            fixed(row.pnt_relative_error, 4)
        )?;
        writeln!(
            self.out,
            "  li(x) relative error: {}",
            fixed(row.li_relative_error, 4)
        )?;

        writeln!(
            self.out,
            "\nConvergence to PNT: π(x)/(x/ln(x)) = {}",
            fixed(summary.ratio, 6)
        )?;
        writeln!(self.out, "Theoretical limit: 1.000000")?;
        writeln!(self.out, "Deviation: {}", fixed(summary.deviation, 6))
    }

    pub fn write_gap_analysis(&mut self, analysis: &GapAnalysis) -> io::Result<()> {
        let gap = &analysis.gap;
        self.section("ANALYSIS 2: PRIME GAPS DISTRIBUTION")?;

        writeln!(self.out, "\nPrime gaps statistics:")?;
        writeln!(self.out, "  Average gap: {}", fixed(gap.mean, 2))?;
        writeln!(self.out, "  Median gap: {}", fixed(gap.median, 2))?;
        writeln!(self.out, "  Maximum gap: {}", fixed(gap.max, 0))?;
        writeln!(self.out, "  Standard deviation: {}", fixed(gap.std, 2))?;

        writeln!(self.out, "\nGap vs log(prime) analysis:")?;
        writeln!(
            self.out,
            "  Correlation coefficient: {}",
            fixed(analysis.correlation, 4)
        )?;
        writeln!(
            self.out,
            "  Average gap/log(prime) ratio: {}",
            fixed(analysis.mean_gap_over_log, 4)
        )
    }

    pub fn write_accuracy_trend(&mut self, points: &[AccuracyPoint]) -> io::Result<()> {
        self.section("ANALYSIS 3: APPROXIMATION ACCURACY TRENDS")?;

        writeln!(self.out, "\nAccuracy improvement with increasing x:")?;
        writeln!(
            self.out,
            "x\t\tπ(x)\tx/ln(x) error\tli(x) error\tImprovement"
        )?;
        self.rule('-', TABLE_RULE_WIDTH)?;

        for point in points {
            let row = &point.sample;
            writeln!(
                self.out,
                "{}\t\t{}\t{}\t\t{}\t\t{}x",
                grouped(row.x, 0),
                grouped(row.pi_x, 0),
                fixed(row.pnt_relative_error, 4),
                fixed(row.li_relative_error, 4),
                fixed(point.improvement, 1)
            )?;
        }
        Ok(())
    }

    pub fn write_twin_primes(&mut self, analysis: &TwinPrimeAnalysis) -> io::Result<()> {
        self.section("ANALYSIS 4: TWIN PRIMES ANALYSIS")?;

        writeln!(
            self.out,
            "\nTwin primes analysis (first {} primes):",
            analysis.total
        )?;
        writeln!(self.out, "  Twin primes found: {}", analysis.twin_count)?;
        writeln!(self.out, "  Percentage: {}%", fixed(analysis.percentage, 1))?;
        writeln!(
            self.out,
            "  Largest twin prime in dataset: {}",
            analysis.largest_twin
        )?;
        writeln!(
            self.out,
            "  Hardy-Littlewood estimate up to {}: {}",
            analysis.max_prime,
            fixed(analysis.hardy_littlewood_estimate, 0)
        )?;
        writeln!(
            self.out,
            "  Observed twin primes up to {}: {}",
            analysis.max_prime, analysis.observed
        )
    }

    pub fn write_conclusion(&mut self) -> io::Result<()> {
        self.section("CONCLUSION")?;

        writeln!(
            self.out,
            "\nThe computational analysis confirms the Prime Number Theorem:"
        )?;
        writeln!(self.out, "1. π(x) ~ x/ln(x) as x → ∞")?;
        writeln!(self.out, "2. li(x) provides superior approximation accuracy")?;
        writeln!(self.out, "3. Prime gaps show expected logarithmic growth")?;
        writeln!(self.out, "4. Twin primes follow predicted density patterns")?;
        writeln!(self.out, "\nThis demonstrates the deep connection between")?;
        writeln!(self.out, "prime distribution and logarithmic functions!")
    }
}
