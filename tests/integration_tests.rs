//! Integration tests running the `monthcal` binary.

use assert_cmd::Command;
use chrono::Datelike;
use predicates::prelude::*;

use monthcal::formatter::render_month;
use monthcal::types::Params;

fn monthcal() -> Command {
    let mut cmd = Command::cargo_bin("monthcal").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

const JANUARY_2024: &str = " 2024                January
 Mon Tue Wed Thu Fri Sat Sun
   1   2   3   4   5   6   7
   8   9  10  11  12  13  14
  15  16  17  18  19  20  21
  22  23  24  25  26  27  28
  29  30  31
";

mod output {
    use super::*;

    #[test]
    fn no_arguments_prints_current_month() {
        let today = chrono::Local::now().date_naive();
        let expected = render_month(&Params {
            year: today.year(),
            month: today.month(),
            first_weekday: 1,
        });
        monthcal().assert().success().stdout(expected);
    }

    #[test]
    fn year_and_month() {
        monthcal()
            .args(["2024", "1"])
            .assert()
            .success()
            .stdout(JANUARY_2024);
    }

    #[test]
    fn leap_february() {
        monthcal()
            .args(["2024", "2"])
            .assert()
            .success()
            .stdout(predicate::str::contains("February"))
            .stdout(predicate::str::contains(
                "               1   2   3   4\n",
            ))
            .stdout(predicate::str::ends_with("  26  27  28  29\n"));
    }

    #[test]
    fn sunday_first() {
        monthcal()
            .args(["2024", "9", "7"])
            .assert()
            .success()
            .stdout(predicate::str::contains(" Sun Mon Tue Wed Thu Fri Sat\n"))
            .stdout(predicate::str::contains("   1   2   3   4   5   6   7\n"));
    }

    #[test]
    fn environment_does_not_change_current_month() {
        let today = chrono::Local::now().date_naive();
        let title = format!(" {:>4} ", today.year());
        monthcal()
            .env("MONTHCAL_TODAY", "1999-12-31")
            .env("CAL_TEST_TIME", "1999-12-31")
            .assert()
            .success()
            .stdout(predicate::str::starts_with(title));
    }

    #[test]
    fn verbose_logs_go_to_stderr() {
        monthcal()
            .args(["-vv", "2024", "1"])
            .assert()
            .success()
            .stdout(JANUARY_2024)
            .stderr(predicate::str::contains("resolved parameters"));
    }
}

mod help {
    use super::*;

    #[test]
    fn usage_names_values_once() {
        monthcal()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("[VALUES]..."))
            .stdout(predicate::str::contains("first-weekday]]").not());
    }
}

mod errors {
    use super::*;

    #[test]
    fn single_argument() {
        monthcal()
            .arg("2024")
            .assert()
            .failure()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("got 1 argument(s)"));
    }

    #[test]
    fn too_many_arguments() {
        monthcal()
            .args(["2024", "1", "1", "1"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("got 4 argument(s)"));
    }

    #[test]
    fn not_a_number() {
        monthcal()
            .args(["2024", "jan"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("not a number: \"jan\""));
    }

    #[test]
    fn hyphenated_text_is_not_a_number() {
        monthcal()
            .args(["2024", "-x"])
            .assert()
            .failure()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("not a number: \"-x\""));
    }

    #[test]
    fn negative_year() {
        monthcal()
            .args(["-5", "1"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("invalid year: -5"));
    }

    #[test]
    fn zero_year() {
        monthcal()
            .args(["0", "1"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid year: 0"));
    }

    #[test]
    fn month_out_of_range() {
        monthcal()
            .args(["2024", "13"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid month: 13"));
    }

    #[test]
    fn first_weekday_out_of_range() {
        monthcal()
            .args(["2024", "1", "8"])
            .assert()
            .failure()
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("invalid first weekday: 8"));
    }
}
