use std::path::Path;
use std::process::{Command, Stdio};

use assert_cmd::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use tempfile::TempDir;

const SETTINGS: &str = "\
directory:
  autoconfig: '~/autoconfig'
  assets: '~/assets'
input:
  joypad_driver: udev
menu:
  theme: flatui
";

fn retropath(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("retropath").expect("failed to locate retropath binary");
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home)
        .env_remove("RETROPATH_CONFIG")
        .stderr(Stdio::null());
    cmd
}

fn home_with_settings() -> TempDir {
    let home = TempDir::new().expect("failed to create temp dir");
    std::fs::write(home.path().join("retroarch.yaml"), SETTINGS).expect("failed to write settings");
    home
}

fn bench_cli_startup(c: &mut Criterion) {
    c.bench_function("cli_startup_version", |b| {
        b.iter(|| {
            let mut cmd = Command::cargo_bin("retropath").expect("failed to locate retropath binary");
            let output = cmd.arg("--version").output().expect("failed to run retropath");
            black_box(output);
        });
    });
}

fn bench_cli_expand(c: &mut Criterion) {
    let home = TempDir::new().expect("failed to create temp dir");
    c.bench_function("cli_expand", |b| {
        b.iter(|| {
            let output = retropath(home.path())
                .args(["expand", "~/saves", ":/cores", "/etc/retroarch.cfg"])
                .output()
                .expect("failed to execute retropath expand");
            black_box(output);
        });
    });
}

fn bench_cli_resolve(c: &mut Criterion) {
    c.bench_function("cli_resolve", |b| {
        b.iter_batched(
            home_with_settings,
            |home| {
                let config = home.path().join("retroarch.yaml");
                let output = retropath(home.path())
                    .arg("--config")
                    .arg(&config)
                    .args(["resolve", "xmb-background", "--skins", "xmb"])
                    .output()
                    .expect("failed to execute retropath resolve");
                black_box(output);
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_cli_list(c: &mut Criterion) {
    c.bench_function("cli_list", |b| {
        b.iter_batched(
            home_with_settings,
            |home| {
                let config = home.path().join("retroarch.yaml");
                let output = retropath(home.path())
                    .arg("--config")
                    .arg(&config)
                    .args(["list", "--format", "json", "--skins", "all"])
                    .output()
                    .expect("failed to execute retropath list");
                black_box(output);
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    cli_benches,
    bench_cli_startup,
    bench_cli_expand,
    bench_cli_resolve,
    bench_cli_list
);
criterion_main!(cli_benches);
