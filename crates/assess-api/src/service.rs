//! Assessment service: the entry point used by request handlers.

use assess_core::{Category, DimensionReading, Profile, RespondentId, Response, ScoreSheet, TeamCode};
use assess_insights::{RecommendationSet, Recommender, Subject};
use assess_scoring::{normalize_response, Completion, ScoringEngine, TeamLens};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;

use crate::error::ServiceResult;
use crate::ids::IdGenerator;
use crate::store::{AssessmentStore, Team};

/// Individual results page payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndividualResult {
    pub respondent: RespondentId,
    pub category: Category,
    pub completion: Completion,
    /// Flat score object with the published field names
    pub scores: ScoreSheet,
    pub readings: Vec<DimensionReading>,
    pub profile: Profile,
    pub recommendations: RecommendationSet,
    pub generated_at: DateTime<Utc>,
}

/// Team dashboard payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamDashboard {
    pub team: TeamCode,
    pub name: String,
    pub category: Category,
    pub roster_size: usize,
    /// Members whose answers for the category are complete
    pub completed: usize,
    pub lens: TeamLens,
    pub recommendations: RecommendationSet,
    pub generated_at: DateTime<Utc>,
}

pub struct AssessmentService {
    engine: Arc<ScoringEngine>,
    recommender: Arc<Recommender>,
    store: AssessmentStore,
    ids: Arc<dyn IdGenerator>,
}

impl AssessmentService {
    pub fn new(engine: Arc<ScoringEngine>, recommender: Arc<Recommender>, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            engine,
            recommender,
            store: AssessmentStore::new(),
            ids,
        }
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    pub fn store(&self) -> &AssessmentStore {
        &self.store
    }

    pub fn new_respondent(&self) -> RespondentId {
        self.ids.respondent_id()
    }

    /// Validate and upsert answers. Nothing is stored if any answer is
    /// invalid.
    pub async fn submit(
        &self,
        respondent: RespondentId,
        category: Category,
        responses: Vec<Response>,
    ) -> ServiceResult<Completion> {
        let registry = self.engine.registry(category)?;
        for response in &responses {
            normalize_response(response, registry)?;
        }

        let replaced = self.store.record(respondent, category, responses).await;
        let stored = self.store.responses(respondent, category).await;
        let completion = self.engine.completion(category, &stored)?;

        tracing::info!(
            %respondent,
            %category,
            answered = completion.answered,
            total = completion.total,
            replaced,
            "recorded responses"
        );

        Ok(completion)
    }

    /// Score and interpret a respondent's current answers
    pub async fn results(&self, respondent: RespondentId, category: Category) -> ServiceResult<IndividualResult> {
        let responses = self.store.responses(respondent, category).await;
        let completion = self.engine.completion(category, &responses)?;
        let profile = self.engine.score_category(category, &responses)?;
        let recommendations = self.recommender.recommend(Subject::Profile(&profile)).await;

        Ok(IndividualResult {
            respondent,
            category,
            completion,
            scores: ScoreSheet::from_profile(&profile),
            readings: profile.readings(),
            profile,
            recommendations,
            generated_at: Utc::now(),
        })
    }

    /// Create an empty team under a fresh code
    pub async fn create_team(&self, name: &str) -> TeamCode {
        let mut code = self.ids.team_code();
        while self.store.contains_team(&code).await {
            code = self.ids.team_code();
        }

        self.store
            .insert_team(Team {
                code: code.clone(),
                name: name.trim().to_string(),
                members: BTreeSet::new(),
            })
            .await;

        tracing::info!(team = %code, "created team");
        code
    }

    pub async fn join_team(&self, code: &TeamCode, respondent: RespondentId) -> ServiceResult<()> {
        self.store.add_member(code, respondent).await
    }

    pub async fn leave_team(&self, code: &TeamCode, respondent: RespondentId) -> ServiceResult<()> {
        self.store.remove_member(code, respondent).await
    }

    /// Team lens over members who completed the category
    pub async fn team_dashboard(&self, code: &TeamCode, category: Category) -> ServiceResult<TeamDashboard> {
        let team = self.store.team(code).await?;

        let mut profiles = Vec::with_capacity(team.members.len());
        for member in &team.members {
            let responses = self.store.responses(*member, category).await;
            if !self.engine.completion(category, &responses)?.is_complete() {
                continue;
            }
            profiles.push(self.engine.score_category(category, &responses)?);
        }

        let lens = self.engine.classify_team(category, &profiles)?;
        let recommendations = self.recommender.recommend(Subject::Team(&lens)).await;

        Ok(TeamDashboard {
            team: team.code,
            name: team.name,
            category,
            roster_size: team.members.len(),
            completed: profiles.len(),
            lens,
            recommendations,
            generated_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assess_core::{Band, Dimension};
    use assess_insights::RecommendationSource;

    use crate::error::ServiceError;
    use crate::ids::SequentialIds;

    fn service() -> AssessmentService {
        AssessmentService::new(
            Arc::new(ScoringEngine::builtin()),
            Arc::new(Recommender::default()),
            Arc::new(SequentialIds::new()),
        )
    }

    fn answer_all(service: &AssessmentService, category: Category, value: impl Fn(&str) -> i64) -> Vec<Response> {
        service
            .engine()
            .registry(category)
            .unwrap()
            .questions()
            .iter()
            .map(|q| Response::new(q.id.clone(), value(q.id.as_str())))
            .collect()
    }

    #[tokio::test]
    async fn test_submit_and_results() {
        let service = service();
        let who = service.new_respondent();

        let partial = vec![Response::new("C1", 5), Response::new("C2", 1)];
        let completion = service.submit(who, Category::Ocean, partial).await.unwrap();
        assert_eq!(completion.answered, 2);
        assert!(!completion.is_complete());

        let result = service.results(who, Category::Ocean).await.unwrap();
        assert_eq!(result.profile.score(Dimension::Conscientiousness), Some(100));
        assert_eq!(result.profile.score(Dimension::Openness), Some(0));
        assert_eq!(result.readings.len(), 5);
        assert_eq!(result.recommendations.source, RecommendationSource::Templates);
        assert_eq!(result.recommendations.items.len(), 5);

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["scores"]["conscientiousness"], 100);
        assert_eq!(json["readings"][1]["styleLabel"], "Reliable organizer");
    }

    #[tokio::test]
    async fn test_invalid_submission_stores_nothing() {
        let service = service();
        let who = service.new_respondent();

        let err = service
            .submit(who, Category::Values, vec![Response::new("INN1", 4), Response::new("INN2", 9)])
            .await
            .unwrap_err();
        assert!(err.is_client_error());
        assert!(service.store().responses(who, Category::Values).await.is_empty());

        let err = service
            .submit(who, Category::Values, vec![Response::new("O1", 3)])
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Engine(ref e) if e.is_configuration()));
    }

    #[tokio::test]
    async fn test_resubmission_overwrites() {
        let service = service();
        let who = service.new_respondent();

        service.submit(who, Category::Ocean, vec![Response::new("E1", 1)]).await.unwrap();
        service.submit(who, Category::Ocean, vec![Response::new("E1", 5)]).await.unwrap();

        let result = service.results(who, Category::Ocean).await.unwrap();
        assert_eq!(result.completion.answered, 1);
        assert_eq!(result.profile.score(Dimension::Extraversion), Some(100));
    }

    #[tokio::test]
    async fn test_team_dashboard_uses_completed_members() {
        let service = service();
        let code = service.create_team("  Platform ").await;

        // Conscientiousness items C1, C3 forward and C2, C4 reversed
        let members = [(1, 5), (3, 3), (5, 1)];
        for (forward, reverse) in members {
            let who = service.new_respondent();
            service.join_team(&code, who).await.unwrap();
            let answers = answer_all(&service, Category::Ocean, |id| match id {
                "C1" | "C3" => forward,
                "C2" | "C4" => reverse,
                _ => 3,
            });
            service.submit(who, Category::Ocean, answers).await.unwrap();
        }

        // Incomplete member is on the roster but not in the lens
        let straggler = service.new_respondent();
        service.join_team(&code, straggler).await.unwrap();
        service
            .submit(straggler, Category::Ocean, vec![Response::new("C1", 5)])
            .await
            .unwrap();

        let dashboard = service.team_dashboard(&code, Category::Ocean).await.unwrap();
        assert_eq!(dashboard.name, "Platform");
        assert_eq!(dashboard.roster_size, 4);
        assert_eq!(dashboard.completed, 3);
        // Member scores 20, 60, 100 → median 60 → balanced
        let c = dashboard.lens.get(Dimension::Conscientiousness).unwrap();
        assert_eq!(c.median_score, Some(60));
        assert_eq!(c.band, Band::Balanced);
        assert!(!dashboard.recommendations.items.is_empty());
    }

    #[tokio::test]
    async fn test_empty_team_dashboard() {
        let service = service();
        let code = service.create_team("New").await;
        let dashboard = service.team_dashboard(&code, Category::Culture).await.unwrap();
        assert_eq!(dashboard.completed, 0);
        assert!(dashboard.lens.is_fallback());
        assert!(dashboard.lens.dimensions.iter().all(|d| d.band == Band::Balanced));

        let unknown = TeamCode("NOPE99".to_string());
        assert!(matches!(
            service.team_dashboard(&unknown, Category::Culture).await,
            Err(ServiceError::UnknownTeam(_))
        ));
    }
}
