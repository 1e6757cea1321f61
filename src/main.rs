use std::io::{self, Write};
use std::path::{Path, PathBuf};

use fractal_cipher::{
    Session, embed, export_text, import_text, import_text_async, render_with, show,
};

const SESSION_FILE: &str = "session.bin";
const DEFAULT_CONFIG_FILE: &str = "fractal.json";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config_path = std::env::var("FRACTAL_CIPHER_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));
    let mut session = Session::open(SESSION_FILE, &config_path)?;

    println!("\n╭──────────────────────────────────────────╮");
    println!("│           fractal text encoder           │");
    println!("│                                          │");
    println!("│ text becomes a julia set parameter       │");
    println!("│ exported PNGs carry the text back out    │");
    println!("│                                          │");
    println!("│ /encode <text>   - encode new text       │");
    println!("│ /export <path>   - write fractal PNG     │");
    println!("│ /import <path>   - read text from PNG    │");
    println!("│ /batch <dir>     - import every PNG      │");
    println!("│ /view            - preview window        │");
    println!("│ /state  /config  /save  /quit            │");
    println!("╰──────────────────────────────────────────╯\n");

    print_state(&session);

    loop {
        print!("text: ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim_end_matches(['\r', '\n']);

        if input.trim().is_empty() { continue; }

        let (command, arg) = match input.split_once(' ') {
            Some((cmd, rest)) if cmd.starts_with('/') => (cmd, rest.trim()),
            _ if input.starts_with('/') => (input.trim(), ""),
            _ => ("/encode", input),
        };

        match command {
            "/quit" => break,
            "/state" => print_state(&session),
            "/config" => {
                let c = session.config;
                println!("{}x{}, {} iterations ({})\n", c.width, c.height, c.max_iterations, config_path.display());
            }
            "/save" => match session.save(SESSION_FILE) {
                Ok(()) => println!("✓ saved\n"),
                Err(e) => println!("save error: {}\n", e),
            },
            "/encode" => {
                session.set_text(arg);
                print_state(&session);
            }
            "/export" => {
                let path = if arg.is_empty() { "fractal-export.png" } else { arg };
                match export_text(path, &session.text, &session.config) {
                    Ok(_) => println!("✓ exported to {}\n", path),
                    Err(e) => println!("export failed: {}\n", e),
                }
            }
            "/import" => {
                if arg.is_empty() {
                    println!("usage: /import <path>\n");
                    continue;
                }
                match import_text_async(arg).await {
                    Ok(text) => {
                        session.set_text(&text);
                        println!("✓ recovered {} chars", text.chars().count());
                        print_state(&session);
                    }
                    Err(e) => println!("import failed: {}\n", e),
                }
            }
            "/batch" => {
                let dir = if arg.is_empty() { "." } else { arg };
                batch_import(Path::new(dir));
            }
            "/view" => {
                let buffer = render_with(session.parameter, &session.config);
                let buffer = match embed(buffer, &session.text) {
                    Ok(b) => b,
                    Err(e) => {
                        println!("view failed: {}\n", e);
                        continue;
                    }
                };
                let title = format!("Julia set c = {}", session.parameter);
                if let Err(e) = show(&buffer, &title) {
                    println!("couldn't open window: {}\n", e);
                }
            }
            other => println!("unknown command {}\n", other),
        }
    }

    if let Err(e) = session.save(SESSION_FILE) {
        println!("save error: {}", e);
    }
    Ok(())
}

fn print_state(session: &Session) {
    println!("text:      {:?}", session.text);
    println!("c:         {}", session.parameter);
    println!("capacity:  {} chars\n", session.config.width.saturating_sub(1));
}

fn batch_import(dir: &Path) {
    let mut paths: Vec<PathBuf> = walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.path()
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
        })
        .map(|e| e.into_path())
        .collect();
    paths.sort();

    println!("\n📂 found {} PNG files\n", paths.len());

    let mut recovered = 0;
    for (i, path) in paths.iter().enumerate() {
        match import_text(path) {
            Ok(text) => {
                recovered += 1;
                println!("[{}/{}] {} -> {:?}", i + 1, paths.len(), path.display(), text);
            }
            Err(e) => println!("[{}/{}] {}: {}", i + 1, paths.len(), path.display(), e),
        }
    }

    println!("\n✓ recovered text from {}/{} files\n", recovered, paths.len());
}
