use crate::ai::AnswerJudge;
use crate::logger;
use crate::models::{AiRequest, AiResponse};
use std::sync::Arc;
use tokio::sync::mpsc::{Receiver, Sender};
use tokio::task::JoinHandle;

/// Judge submitted answers off the UI loop. Exits when either channel closes.
pub fn spawn_ai_worker(
    judge: Arc<AnswerJudge>,
    ai_tx: Sender<AiResponse>,
    mut ai_rx: Receiver<AiRequest>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(request) = ai_rx.recv().await {
            let AiRequest::Judge {
                submission_id,
                question,
                user_answer,
            } = request;
            logger::log(&format!(
                "Worker received judge request {}",
                submission_id
            ));

            let response = match judge.judge(&question, &user_answer).await {
                Ok(verdict) => {
                    logger::log(&format!(
                        "Worker sending verdict {} (correct: {})",
                        submission_id, verdict.is_correct
                    ));
                    AiResponse::Verdict {
                        submission_id,
                        verdict,
                    }
                }
                Err(e) => {
                    logger::log(&format!("Worker error: {}", e));
                    AiResponse::Error {
                        submission_id,
                        error: capitalize(&e.to_string()),
                    }
                }
            };

            if ai_tx.send(response).await.is_err() {
                break;
            }
        }
        logger::log("Worker channel disconnected, exiting");
    })
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::model::{MockGenerator, TextGenerator};
    use crate::ai::{GenerationParams, ModelHandle};
    use crate::error::JudgeError;
    use tokio::sync::mpsc;

    fn judge_for(mock: MockGenerator) -> Arc<AnswerJudge> {
        let handle = ModelHandle::preloaded(Arc::new(mock) as Arc<dyn TextGenerator>);
        Arc::new(AnswerJudge::new(
            Arc::new(handle),
            GenerationParams::default(),
        ))
    }

    #[tokio::test]
    async fn test_worker_returns_verdict() {
        let (request_tx, request_rx) = mpsc::channel(8);
        let (response_tx, mut response_rx) = mpsc::channel(8);
        let worker = spawn_ai_worker(
            judge_for(MockGenerator::replying("Yes, correct.")),
            response_tx,
            request_rx,
        );

        request_tx
            .send(AiRequest::Judge {
                submission_id: 3,
                question: "Q?".to_string(),
                user_answer: "A".to_string(),
            })
            .await
            .unwrap();

        match response_rx.recv().await.unwrap() {
            AiResponse::Verdict {
                submission_id,
                verdict,
            } => {
                assert_eq!(submission_id, 3);
                assert!(verdict.is_correct);
            }
            other => panic!("unexpected response: {:?}", other),
        }

        drop(request_tx);
        worker.await.unwrap();
    }

    #[tokio::test]
    async fn test_worker_reports_model_errors() {
        let (request_tx, request_rx) = mpsc::channel(8);
        let (response_tx, mut response_rx) = mpsc::channel(8);
        let _worker = spawn_ai_worker(
            judge_for(MockGenerator::failing(JudgeError::ModelUnavailable(
                "offline".to_string(),
            ))),
            response_tx,
            request_rx,
        );

        request_tx
            .send(AiRequest::Judge {
                submission_id: 1,
                question: "Q?".to_string(),
                user_answer: "A".to_string(),
            })
            .await
            .unwrap();

        match response_rx.recv().await.unwrap() {
            AiResponse::Error {
                submission_id,
                error,
            } => {
                assert_eq!(submission_id, 1);
                assert_eq!(error, "Model unavailable: offline");
            }
            other => panic!("unexpected response: {:?}", other),
        }
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("model unavailable"), "Model unavailable");
        assert_eq!(capitalize(""), "");
    }
}
