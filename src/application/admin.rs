//! Admin Use Case
//!
//! Thin orchestration over the AdminGateway: pagination bounds, file
//! deletion followed by a refresh of the participant's file list.

use crate::domain::ports::{AdminGateway, EmailRound, ParticipantPage, ParticipantQuery, UserFiles};
use crate::error::XdetexResult;

/// Result of a delete: the backend answer plus what is left afterwards
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteOutcome {
    pub response: serde_json::Value,
    pub remaining: UserFiles,
}

/// One listed page, with the numbers needed to render pagination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantListing {
    pub page: ParticipantPage,
    pub page_number: u32,
    pub page_count: u64,
}

pub struct AdminUseCase<G>
where
    G: AdminGateway,
{
    gateway: G,
}

impl<G> AdminUseCase<G>
where
    G: AdminGateway,
{
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// List one page of participants. Page numbers below 1 are treated as 1.
    pub fn participants(&self, query: ParticipantQuery) -> XdetexResult<ParticipantListing> {
        let query = ParticipantQuery {
            page: query.page.max(1),
            page_size: query.page_size.max(1),
            ..query
        };
        let page = self.gateway.participants(&query)?;
        let page_count = page.page_count(query.page_size);
        Ok(ParticipantListing {
            page,
            page_number: query.page,
            page_count,
        })
    }

    pub fn files(&self, email: &str) -> XdetexResult<UserFiles> {
        self.gateway.user_files(email)
    }

    /// Delete every stored file of `email`
    pub fn delete_all(&self, email: &str) -> XdetexResult<DeleteOutcome> {
        let response = self.gateway.delete_all_files(email)?;
        let remaining = self.gateway.user_files(email)?;
        Ok(DeleteOutcome {
            response,
            remaining,
        })
    }

    /// Delete a single stored file of `email`
    pub fn delete_file(&self, email: &str, filename: &str) -> XdetexResult<DeleteOutcome> {
        let response = self.gateway.delete_file(email, filename)?;
        let remaining = self.gateway.user_files(email)?;
        Ok(DeleteOutcome {
            response,
            remaining,
        })
    }

    /// Every collected upload as one archive
    pub fn download(&self) -> XdetexResult<Vec<u8>> {
        self.gateway.download_all()
    }

    pub fn send_round(&self, round: EmailRound) -> XdetexResult<serde_json::Value> {
        self.gateway.send_round(round)
    }
}
