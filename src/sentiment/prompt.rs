//! Fixed prompt template for sentiment classification.
//!
//! The model is asked for a three-line labeled reply (감정/점수/이유) and
//! given one worked example to bias it toward that formatting. There is no
//! schema enforcement; the parser on the other side is tolerant instead.

pub const LABEL_MARKER: &str = "감정:";
pub const SCORE_MARKER: &str = "점수:";
pub const RATIONALE_MARKER: &str = "이유:";

pub fn build(text: &str) -> String {
    format!(
        "다음 뉴스 기사의 감정을 분석해주세요.\n\
         \n\
         기사 내용:\n\
         {text}\n\
         \n\
         다음 형식으로 답변해주세요:\n\
         감정: [긍정/부정/중립]\n\
         점수: [0.0~1.0 사이의 숫자, 1.0에 가까울수록 강한 긍정]\n\
         이유: [약간 구체적인 분석 이유]\n\
         \n\
         예시:\n\
         감정: 긍정\n\
         점수: 0.8\n\
         이유: 경제 성장과 고용 증가에 대한 긍정적인 내용이 주를 이룸...등\n"
    )
}
