use std::env;
use std::fs;
use std::path::Path;

/// Claves que el frontend lee con `option_env!` (ver src/config.rs)
const KNOWN_KEYS: &[&str] = &[
    "API_BASE_URL",
    "ENABLE_LOGGING",
    "NOTIFICATION_DISPLAY_MS",
    "NOTIFICATION_EXIT_MS",
    "CLOCK_TICK_MS",
    "RELEASE_CAMERA_ON_LEAVE",
    "NOTIFY_READ_FAILURES",
    "CAPTURE_MIME",
];

fn main() {
    // Cargar variables de entorno desde .env si existe
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                // KEY=VALUE, comillas opcionales
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"');

                    if !KNOWN_KEYS.contains(&key) {
                        println!("cargo:warning=Clave desconocida en .env: {}", key);
                        continue;
                    }

                    // El entorno real tiene prioridad sobre .env
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    } else {
        println!("cargo:warning=No .env file found. Using defaults (API_BASE_URL=http://localhost:5000/api).");
    }

    for key in KNOWN_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }
    println!("cargo:rerun-if-changed=build.rs");
}
