//! プロンプトテンプレート
//!
//! 4 種類の固定テンプレートにユーザー入力を埋め込む純粋関数。
//! 同じ入力に対して常に同じ文字列を返す（隠れた状態を持たない）。

/// 練習題生成の既定の出題数
pub const DEFAULT_TRAINING_COUNT: usize = 5;

/// 概念解释: 定義の詳細な説明と例を求める
pub fn explain_definition(definition: &str) -> String {
    format!(
        "你好，特蕾西娅！\n\
         请详细解释以下概率论与数理统计定义：\n\
         {}\n\
         \n\
         输出要求：\n\
         1. 定义：给出定义的详细解释。\n\
         2. 例子：提供相关的例子帮助理解。\n",
        definition
    )
}

/// 例题讲解: 問題の解法・手順・最終解を求める
pub fn analyze_question(question: &str) -> String {
    format!(
        "你好，特蕾西娅！\n\
         请详细解答以下概率论与数理统计问题：\n\
         {}\n\
         \n\
         输出要求：\n\
         1. 题解思路：使用清晰的逻辑表明思考经过。\n\
         2. 具体题解步骤：逐步展示解题过程。\n\
         3. 最终答案：明确给出最终结果。\n",
        question
    )
}

/// 生成练习题: 指定テーマの練習問題を求める
///
/// `_count` は受け取るだけで、現状はテンプレートに反映されない。
// TODO: 出題数の文言が確定したら _count をテンプレートへ反映する
pub fn create_training(topic: &str, _count: usize) -> String {
    format!(
        "你好，特蕾西娅！\n\
         请以{}为核心知识点创建练习题：\n\
         \n\
         输出要求：\n\
         1. 题目：涵盖该主题的核心概念，难度梯度明显，涵盖各层次，适于初学者练习。\n",
        topic
    )
}

/// 检查答案: 練習問題（解答込み）の正誤判定と解説を求める
pub fn check_training(training: &str) -> String {
    format!(
        "你好，特蕾西娅！\n\
         请检查以下概率论与数理统计练习题的正确性：\n\
         {}\n\
         \n\
         输出要求：\n\
         1. 正误：指出题目的正确性或错误性。\n\
         2. 详解：提供详细的解答和解释。\n",
        training
    )
}
