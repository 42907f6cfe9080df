use clap::Parser;
use ert_viz::utils::{logger, validation::Validate};
use ert_viz::{ChartPipeline, CliConfig, CsvFileSource, VizEngine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting ert-viz CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // 創建資料來源和管道
    let source = CsvFileSource::new(config.data_path.clone());
    let pipeline = ChartPipeline::new(source, config);

    // 創建渲染引擎並執行
    let engine = VizEngine::new(pipeline);

    match engine.run() {
        Ok(output_path) => {
            tracing::info!("✅ Chart rendering completed successfully!");
            tracing::info!("📁 Output saved to: {}", output_path.display());
            println!("✅ Chart rendering completed successfully!");
            println!("📁 Output saved to: {}", output_path.display());
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Chart rendering failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 輸出用戶友好的錯誤信息
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                ert_viz::utils::error::ErrorSeverity::Low => 0,
                ert_viz::utils::error::ErrorSeverity::Medium => 2,
                ert_viz::utils::error::ErrorSeverity::High => 1,
                ert_viz::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
