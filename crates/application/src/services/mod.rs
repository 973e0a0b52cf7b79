mod answer_engine;

pub use answer_engine::AnswerEngine;
