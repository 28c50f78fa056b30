use clap::Parser;
use tshirt_niche::{analyze_file, cli, config, error, export, logging, prompt, report};
use cli::{Cli, Commands};
use config::Config;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Analyze { input, json } => {
            let input = match input {
                Some(path) => path,
                None => prompt::ask_csv_path()?,
            };

            if json || config.report_json {
                let analysis = analyze_file(&input)?;
                let source = input.display().to_string();
                println!("{}", report::to_json(&analysis.report(), &source, chrono::Local::now())?);
                return Ok(());
            }

            println!("👕 tshirt-niche - 解析\n");
            println!("[1/2] CSVを解析中...");
            let analysis = analyze_file(&input)?;
            println!("✔ {}件中 {}件を解析\n", analysis.total_items(), analysis.scored().len());

            println!("[2/2] レポート\n");
            print!("{}", report::render_text(&analysis.report()));

            println!("\n✅ 解析完了");
        }

        Commands::Export { input, output, format, winning_only } => {
            println!("📄 tshirt-niche - エクスポート\n");

            let analysis = analyze_file(&input)?;
            let format = format.unwrap_or(config.export_format);
            let output_dir = config.output_dir(output);

            export::export_results(&analysis, format, &output_dir, winning_only || config.winning_only)?;

            println!("\n✅ エクスポート完了");
        }

        Commands::Run { input, output } => {
            println!("🚀 tshirt-niche - 一括処理\n");

            println!("[1/3] CSVを解析中...");
            let analysis = analyze_file(&input)?;
            println!("✔ {}件中 {}件を解析\n", analysis.total_items(), analysis.scored().len());

            println!("[2/3] レポート\n");
            print!("{}", report::render_text(&analysis.report()));

            println!("\n[3/3] エクスポート中...");
            let output_dir = config.output_dir(output);
            export::export_results(&analysis, config.export_format, &output_dir, config.winning_only)?;

            println!("\n✅ 完了");
        }

        Commands::Config { set_output_dir, show } => {
            let mut config = config;

            if let Some(dir) = set_output_dir {
                config.set_output_dir(dir)?;
                println!("✔ 出力先を設定しました");
            }

            if show {
                println!("設定:");
                println!("  パス: {}", Config::config_path()?.display());
                println!(
                    "  出力先: {}",
                    config
                        .default_output_dir
                        .as_ref()
                        .map(|d| d.display().to_string())
                        .unwrap_or_else(|| "未設定（カレント）".to_string())
                );
                println!("  出力形式: {}", config.export_format);
                println!("  勝ち候補のみ: {}", if config.winning_only { "有効" } else { "無効" });
                println!("  JSON表示: {}", if config.report_json { "有効" } else { "無効" });
            }
        }
    }

    Ok(())
}
