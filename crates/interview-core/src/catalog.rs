//! Interview catalog: interview definitions and directly submitted evaluations.

use std::rc::Rc;

use chrono::{DateTime, NaiveDate, Utc};
use interview_types::{
    InterviewError, Result,
    evaluation::{Evaluation, SubmitEvaluationRequest},
    event::SessionEvent,
    interview::{CreateInterviewRequest, Interview, ListInterviewsResponse},
    query::{ListQuery, SortBy, SortOrder},
};
use crate::event_bus::EventBus;
use crate::scoring::{feedback_for, score_answers};
use crate::store::SessionStore;

/// Page size used when a page number is given without a limit
pub const DEFAULT_PAGE_SIZE: usize = 10;

pub struct InterviewCatalog {
    store: Rc<SessionStore>,
    event_bus: EventBus,
}

impl InterviewCatalog {
    pub fn new(store: Rc<SessionStore>, event_bus: EventBus) -> Self {
        Self { store, event_bus }
    }

    pub async fn create_interview(&self, req: CreateInterviewRequest) -> Result<Interview> {
        let (candidate_name, questions) = normalize_request(req)?;
        let interview = Interview::new(candidate_name, questions);
        self.store.put_interview(&interview).await?;
        log::info!(
            "Interview {} created with {} questions",
            interview.id,
            interview.question_count()
        );
        Ok(interview)
    }

    pub async fn list_interviews(&self, query: &ListQuery) -> Result<ListInterviewsResponse> {
        let all = self.store.list_interviews().await?;
        apply_query(all, query)
    }

    pub async fn get_interview(&self, id: &str) -> Result<Interview> {
        self.store.get_interview(id).await
    }

    /// Score answers collected outside a chat session.
    pub async fn submit_evaluation(&self, req: SubmitEvaluationRequest) -> Result<Evaluation> {
        let interview = self.store.get_interview(&req.interview_id).await?;
        if req.answers.is_empty() {
            return Err(InterviewError::InvalidInput("answers must not be empty".to_string()));
        }

        let score = score_answers(&req.answers.texts(), interview.question_count());
        let evaluation = Evaluation::new(interview.id, req.answers, score, feedback_for(score));
        self.store.put_evaluation(&evaluation).await?;

        log::info!("Evaluation {} submitted, score {:.2}", evaluation.id, evaluation.score);
        self.event_bus.emit(SessionEvent::EvaluationReady {
            session_id: None,
            evaluation_id: evaluation.id.clone(),
            score: evaluation.score,
        });
        Ok(evaluation)
    }

    pub async fn get_evaluation(&self, id: &str) -> Result<Evaluation> {
        self.store.get_evaluation(id).await
    }

    /// Insert a fully formed record, keeping its id and timestamp.
    pub async fn import_interview(&self, interview: &Interview) -> Result<()> {
        self.store.put_interview(interview).await
    }

    pub async fn import_evaluation(&self, evaluation: &Evaluation) -> Result<()> {
        self.store.put_evaluation(evaluation).await
    }
}

/// Trim the candidate name and questions, drop blank and repeated questions.
pub fn normalize_request(req: CreateInterviewRequest) -> Result<(String, Vec<String>)> {
    let candidate_name = req.candidate_name.trim().to_string();
    if candidate_name.is_empty() {
        return Err(InterviewError::InvalidInput(
            "candidate name must not be empty".to_string(),
        ));
    }

    let mut questions: Vec<String> = Vec::with_capacity(req.questions.len());
    for q in req.questions {
        let q = q.trim();
        if !q.is_empty() && !questions.iter().any(|existing| existing == q) {
            questions.push(q.to_string());
        }
    }
    if questions.is_empty() {
        return Err(InterviewError::InvalidInput(
            "at least one question is required".to_string(),
        ));
    }

    Ok((candidate_name, questions))
}

/// Filter, sort and paginate. `total` counts matches before pagination.
pub fn apply_query(interviews: Vec<Interview>, query: &ListQuery) -> Result<ListInterviewsResponse> {
    let from = query
        .date_from
        .as_deref()
        .map(|s| parse_date_bound(s, false))
        .transpose()?;
    let to = query
        .date_to
        .as_deref()
        .map(|s| parse_date_bound(s, true))
        .transpose()?;
    let name = query
        .candidate_name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_lowercase);

    let mut matches: Vec<Interview> = interviews
        .into_iter()
        .filter(|i| match name {
            Some(ref n) => i.candidate_name.to_lowercase().contains(n.as_str()),
            None => true,
        })
        .filter(|i| from.map_or(true, |f| i.created_at >= f))
        .filter(|i| to.map_or(true, |t| i.created_at <= t))
        .collect();

    let sort_by = query.sort_by.unwrap_or_default();
    let order = query.sort_order.unwrap_or_default();
    matches.sort_by(|a, b| {
        let ord = match sort_by {
            SortBy::Date => a.created_at.cmp(&b.created_at),
            SortBy::Name => a
                .candidate_name
                .to_lowercase()
                .cmp(&b.candidate_name.to_lowercase()),
        }
        .then_with(|| a.id.cmp(&b.id));
        match order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    });

    let total = matches.len();
    let (offset, limit) = match query.page {
        Some(0) => {
            return Err(InterviewError::InvalidInput("page numbers start at 1".to_string()));
        }
        Some(page) => {
            let limit = query.limit.unwrap_or(DEFAULT_PAGE_SIZE);
            ((page - 1).saturating_mul(limit), Some(limit))
        }
        None => (query.offset.unwrap_or(0), query.limit),
    };

    let interviews = matches
        .into_iter()
        .skip(offset)
        .take(limit.unwrap_or(usize::MAX))
        .collect();

    Ok(ListInterviewsResponse { interviews, total })
}

/// Parse an RFC 3339 timestamp or a plain `YYYY-MM-DD` date.
/// A plain date used as an upper bound covers the whole day.
fn parse_date_bound(s: &str, upper: bool) -> Result<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| InterviewError::InvalidInput(format!("invalid date: {}", s)))?;
    let time = if upper {
        date.and_hms_nano_opt(23, 59, 59, 999_999_999)
    } else {
        date.and_hms_opt(0, 0, 0)
    };
    time.map(|t| t.and_utc())
        .ok_or_else(|| InterviewError::InvalidInput(format!("invalid date: {}", s)))
}
