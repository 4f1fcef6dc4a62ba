pub mod pergunta;
