use std::io;

use bmp_to_png::action::cli::process_args;

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let result = process_args(args)?;
    log::info!("程式執行完成，總數：{}，成功：{}，失敗：{}", result.total(), result.success_count(), result.fail_count());
    println!(
        "轉換完成！總數：{}，成功：{}，失敗：{}",
        result.total(),
        result.success_count(),
        result.fail_count()
    );
    for message in result.error_messages() {
        println!("  - {}", message);
    }
    if result.fail_count() > 0 {
        std::process::exit(1);
    }
    Ok(())
}
