use serde::Serialize;

/// 某一套试卷中的选项（已分配字母）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessedOption {
    pub letter: String,
    pub text: String,
    pub image: Option<String>,
}

/// 某一套试卷中的题目
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedQuestion {
    /// 在本套试卷中的题号（从1开始）
    pub question_number: usize,
    pub question_text: String,
    pub question_image: Option<String>,
    pub options: Vec<ProcessedOption>,
    /// 正确选项在本套试卷中的字母
    pub correct_answer: String,
}

impl ProcessedQuestion {
    /// 正确答案字母对应的选项
    pub fn correct_option(&self) -> Option<&ProcessedOption> {
        self.options.iter().find(|opt| opt.letter == self.correct_answer)
    }
}

/// 一套试卷
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionSet {
    pub set_name: String,
    pub questions: Vec<ProcessedQuestion>,
}

impl QuestionSet {
    /// 答案表：(题号, 正确字母)
    pub fn answer_key(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.questions
            .iter()
            .map(|q| (q.question_number, q.correct_answer.as_str()))
    }
}
