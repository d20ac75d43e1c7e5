//! In-memory response and team store.
//!
//! Stands in for the persistence collaborator: answers are upserted
//! last-write-wins per (respondent, category, question) before the engine
//! reads them.

use assess_core::{Category, RespondentId, Response, TeamCode};
use assess_scoring::ResponseLedger;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use tokio::sync::RwLock;

use crate::error::{ServiceError, ServiceResult};

/// A team roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub code: TeamCode,
    pub name: String,
    pub members: BTreeSet<RespondentId>,
}

#[derive(Debug, Default)]
pub struct AssessmentStore {
    responses: RwLock<HashMap<(RespondentId, Category), ResponseLedger>>,
    teams: RwLock<HashMap<TeamCode, Team>>,
}

impl AssessmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert answers; returns how many replaced an earlier answer
    pub async fn record(&self, respondent: RespondentId, category: Category, responses: Vec<Response>) -> usize {
        let mut map = self.responses.write().await;
        let ledger = map.entry((respondent, category)).or_default();
        responses
            .into_iter()
            .filter_map(|r| ledger.upsert(r))
            .count()
    }

    pub async fn responses(&self, respondent: RespondentId, category: Category) -> Vec<Response> {
        self.responses
            .read()
            .await
            .get(&(respondent, category))
            .map(|ledger| ledger.responses().to_vec())
            .unwrap_or_default()
    }

    pub async fn insert_team(&self, team: Team) {
        self.teams.write().await.insert(team.code.clone(), team);
    }

    pub async fn team(&self, code: &TeamCode) -> ServiceResult<Team> {
        self.teams
            .read()
            .await
            .get(code)
            .cloned()
            .ok_or_else(|| ServiceError::UnknownTeam(code.clone()))
    }

    pub async fn contains_team(&self, code: &TeamCode) -> bool {
        self.teams.read().await.contains_key(code)
    }

    pub async fn add_member(&self, code: &TeamCode, respondent: RespondentId) -> ServiceResult<()> {
        let mut teams = self.teams.write().await;
        let team = teams
            .get_mut(code)
            .ok_or_else(|| ServiceError::UnknownTeam(code.clone()))?;
        team.members.insert(respondent);
        Ok(())
    }

    pub async fn remove_member(&self, code: &TeamCode, respondent: RespondentId) -> ServiceResult<()> {
        let mut teams = self.teams.write().await;
        let team = teams
            .get_mut(code)
            .ok_or_else(|| ServiceError::UnknownTeam(code.clone()))?;
        if !team.members.remove(&respondent) {
            return Err(ServiceError::NotAMember {
                team: code.clone(),
                respondent,
            });
        }
        Ok(())
    }
}
