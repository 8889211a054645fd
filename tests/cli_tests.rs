mod common;
use common::{kivo, temp_path};
use predicates::prelude::*;
use serde_json::json;
use std::env;
use std::fs;
use std::path::PathBuf;

const DEAD_API: &str = "http://127.0.0.1:9/api/";

/// Private HOME so no test touches the real config.
fn home(name: &str) -> PathBuf {
    let dir = env::temp_dir().join(format!("{}_kivo_home", name));
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).expect("create temp home");
    dir
}

fn write_session(path: &str, rol: &str) {
    let session = json!({
        "accessToken": "acc-123",
        "refreshToken": "ref-456",
        "user": {
            "rut": "12345678-5",
            "email": "ana@kivo.cl",
            "rol": rol,
            "nombre": "Ana",
            "apellido": "Rojas",
            "empresas": [1, 3]
        }
    });
    fs::write(path, serde_json::to_string_pretty(&session).unwrap()).expect("write session");
}

#[test]
fn help_lists_the_screens() {
    kivo()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("login"))
        .stdout(predicate::str::contains("mark"))
        .stdout(predicate::str::contains("attendance"))
        .stdout(predicate::str::contains("audit"));
}

#[test]
fn status_without_session_asks_to_log_in() {
    let home = home("status_no_session");
    let session = temp_path("status_no_session", "json");

    kivo()
        .env("HOME", &home)
        .args(["--api-url", DEAD_API, "--session", &session, "status"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Sesión inválida"));
}

#[test]
fn whoami_without_session_fails() {
    let home = home("whoami_no_session");
    let session = temp_path("whoami_no_session", "json");

    kivo()
        .env("HOME", &home)
        .args(["--session", &session, "whoami"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Sesión inválida"));
}

#[test]
fn whoami_reads_the_persisted_session() {
    let home = home("whoami_session");
    let session = temp_path("whoami_session", "json");
    write_session(&session, "admin_rrhh");

    kivo()
        .env("HOME", &home)
        .args(["--session", &session, "whoami"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ana Rojas"))
        .stdout(predicate::str::contains("12345678-5"))
        .stdout(predicate::str::contains("1, 3"));
}

#[test]
fn logout_clears_the_session_file() {
    let home = home("logout_session");
    let session = temp_path("logout_session", "json");
    write_session(&session, "trabajador");

    kivo()
        .env("HOME", &home)
        .args(["--session", &session, "logout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sesión cerrada"));

    assert!(!PathBuf::from(&session).exists());

    kivo()
        .env("HOME", &home)
        .args(["--session", &session, "logout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No había una sesión activa"));
}

#[test]
fn worker_cannot_open_the_audit_log() {
    let home = home("audit_worker");
    let session = temp_path("audit_worker", "json");
    write_session(&session, "trabajador");

    kivo()
        .env("HOME", &home)
        .args(["--api-url", DEAD_API, "--session", &session, "audit"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Acción no permitida"));

    // permission errors do not end the session
    assert!(PathBuf::from(&session).exists());
}

#[test]
fn unreachable_backend_is_reported() {
    let home = home("login_offline");
    let session = temp_path("login_offline", "json");

    kivo()
        .env("HOME", &home)
        .args([
            "--api-url",
            DEAD_API,
            "--session",
            &session,
            "login",
            "--rut",
            "12345678-5",
            "--password",
            "secreto",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No se pudo contactar al servidor"));

    assert!(!PathBuf::from(&session).exists());
}

#[test]
fn unknown_mark_kind_is_rejected() {
    kivo()
        .args(["mark", "almuerzo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn config_print_shows_defaults() {
    let home = home("config_print");

    kivo()
        .env("HOME", &home)
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("api_url"))
        .stdout(predicate::str::contains("tick_millis: 1000"));
}

#[test]
fn init_writes_the_config_file() {
    let home = home("init_conf");

    kivo()
        .env("HOME", &home)
        .args(["--api-url", "http://10.0.0.5:8000/api/", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Listo"));

    let conf = fs::read_to_string(home.join(".kivo").join("kivo.conf")).expect("config written");
    assert!(conf.contains("http://10.0.0.5:8000/api/"));
}

/// Minimal HTTP server answering every request with `body`.
#[cfg(unix)]
fn serve_json(body: &'static str) -> String {
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { continue };
            let mut buf = [0u8; 8192];
            let _ = stream.read(&mut buf);
            let reply = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            let _ = stream.write_all(reply.as_bytes());
        }
    });
    format!("http://{addr}/api/")
}

#[cfg(unix)]
#[test]
fn clock_exits_on_ctrl_c_with_stdin_still_open() {
    use std::process::{Command, Stdio};
    use std::thread::sleep;
    use std::time::{Duration, Instant};

    let home = home("clock_sigint");
    let session = temp_path("clock_sigint", "json");
    write_session(&session, "trabajador");
    let api = serve_json(r#"{"tiene_entrada_activa":true,"segundos_restantes":100}"#);

    let mut child = Command::new(env!("CARGO_BIN_EXE_kivo"))
        .env("HOME", &home)
        .args(["--api-url", &api, "--session", &session, "clock"])
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn kivo");

    sleep(Duration::from_secs(2));
    let sent = Command::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .expect("kill");
    assert!(sent.success());

    let deadline = Instant::now() + Duration::from_secs(10);
    let status = loop {
        if let Some(status) = child.try_wait().expect("wait") {
            break Some(status);
        }
        if Instant::now() > deadline {
            break None;
        }
        sleep(Duration::from_millis(100));
    };

    if status.is_none() {
        child.kill().ok();
    }
    let status = status.expect("kivo clock still running after Ctrl-C");
    assert!(status.success());
    // stdin pipe was never closed
    assert!(child.stdin.is_some());
}
