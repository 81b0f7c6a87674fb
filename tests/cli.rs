use assert_cmd::Command;

fn reckon() -> Command {
    Command::cargo_bin("reckon").unwrap()
}

#[test]
fn evaluates_a_single_line() {
    reckon().arg("2 + 3 * 4")
            .assert()
            .success()
            .stdout("14\n");
}

#[test]
fn reports_errors_with_prefix_and_failure_status() {
    reckon().arg("1 / 0")
            .assert()
            .failure()
            .stdout("Error: Division by zero\n");

    reckon().arg("3 +")
            .assert()
            .failure()
            .stdout("Error: Syntax error at line 1, column 4: unexpected end of input\n");
}

#[test]
fn script_lines_share_one_session() {
    reckon().args(["--file", "tests/example.calc"])
            .assert()
            .success()
            .stdout("1000\n5\n3\n150\n1150\n575\n1150\n");
}

#[test]
fn script_errors_do_not_stop_later_lines() {
    let dir = std::env::temp_dir().join(format!("reckon-cli-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let script = dir.join("errors.calc");
    std::fs::write(&script, "x = 2\ny\nx * 4\n").unwrap();

    reckon().arg("--file")
            .arg(&script)
            .assert()
            .failure()
            .stdout("2\nError: Undefined variable: y\n8\n");

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn missing_script_is_reported() {
    reckon().args(["--file", "tests/does-not-exist.calc"])
            .assert()
            .failure()
            .stdout("");
}

#[test]
fn token_mode_prints_the_token_stream() {
    reckon().args(["--tokens", "x = (1+22);"])
            .assert()
            .success()
            .stdout("IDENTIFIER x 1:1\n\
                     EQUALS = 1:3\n\
                     LPAREN ( 1:5\n\
                     NUMBER 1 1:6\n\
                     PLUS + 1:7\n\
                     NUMBER 22 1:8\n\
                     RPAREN ) 1:10\n\
                     SEMICOLON ; 1:11\n\
                     END_OF_INPUT 1:12\n");
}

#[test]
fn token_mode_reports_invalid_characters() {
    reckon().args(["--tokens", "1 ? 2"])
            .assert()
            .failure()
            .stdout("NUMBER 1 1:1\n\
                     Error: Invalid character '?' at line 1, column 3\n\
                     NUMBER 2 1:5\n\
                     END_OF_INPUT 1:6\n");
}

#[test]
fn interactive_prompt_keeps_variables_between_lines() {
    let output = reckon().write_stdin("a = 6\n\nb = a * 7\n:vars\nb / 0\nb\n")
                         .output()
                         .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(output.status.success());
    for expected in ["6\n", "42\n", "a = 6\nb = 42\n", "Error: Division by zero\n"] {
        assert!(stdout.contains(expected), "{expected:?} missing from {stdout:?}");
    }
}
