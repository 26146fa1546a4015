//! 対話ループ（数字メニュー）
//!
//! タスク番号を選び、本文を入力すると応答がストリーミング表示される。
//! `check memory` / `exit` は大文字小文字を区別しない。
//! リモート起因の失敗は Tutor 側で定型文に化けるため、ループはここで止まらない。

use std::io::BufRead;

use common::error::Error;
use common::sink::EventSink;

use crate::usecase::tutor::Tutor;

/// タスク選択メニュー
pub const MENU: &str = "请选择任务类型（输入对应数字）：\n\
                        1. 概念解释\n\
                        2. 例题讲解\n\
                        3. 生成练习题\n\
                        4. 检查答案\n\
                        5. 退出";

/// 本文の入力プロンプト
pub const INPUT_PROMPT: &str = "请输入您的问题（输入 'exit' 退出）：";

/// 終了の挨拶
pub const FAREWELL: &str = "感谢使用，再见！👋";

/// 数字でない入力への注意（通知だけしてループを続行する）
pub const INVALID_MENU_NOTICE: &str = "❌ 请输入有效的数字编号（1-5）。";

/// メニューの「退出」番号
const EXIT_CHOICE: u32 = 5;

/// 対話ループを回す。終了コードを返す。
pub fn run_repl<R: BufRead>(
    tutor: &mut Tutor,
    input: &mut R,
    sink: &mut dyn EventSink,
) -> Result<i32, Error> {
    loop {
        println!("{}", MENU);
        let Some(line) = read_line(input)? else {
            break;
        };
        let choice = line.trim();
        if choice.is_empty() {
            continue;
        }

        let task: u32 = match choice.parse() {
            Ok(n) => n,
            Err(_) => {
                println!("{}", INVALID_MENU_NOTICE);
                continue;
            }
        };
        if task == EXIT_CHOICE {
            println!("{}", FAREWELL);
            break;
        }

        println!("{}", INPUT_PROMPT);
        let Some(line) = read_line(input)? else {
            break;
        };
        let user_input = line.trim();
        if user_input.eq_ignore_ascii_case("check memory") {
            tutor.show_memory();
            continue;
        }
        if user_input.eq_ignore_ascii_case("exit") {
            println!("{}", FAREWELL);
            break;
        }

        // 不明なタスク番号はここに届き、通知だけしてループを続ける
        if let Err(e) = tutor.chat(task, user_input, sink) {
            println!("{}", e);
        }
    }
    Ok(0)
}

/// 1 行読む。EOF なら None。
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>, Error> {
    let mut buf = String::new();
    let n = input
        .read_line(&mut buf)
        .map_err(|e| Error::io_msg(format!("Failed to read input: {}", e)))?;
    if n == 0 {
        return Ok(None);
    }
    Ok(Some(buf))
}
