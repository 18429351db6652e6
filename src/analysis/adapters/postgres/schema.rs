//! Diesel schema for analysis record persistence.

diesel::table! {
    /// Stored AI analysis records.
    ai_analyses (id) {
        /// Surrogate row identifier; never exposed to the domain.
        id -> Int8,
        /// User the analysis belongs to.
        user_id -> Int4,
        /// Analysis type code.
        analysis_type -> Int4,
        /// 1-based sequence within the `(user, type)` history.
        analysis_sequence -> Int4,
        /// Result payload from the AI service.
        analysis_result -> Text,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}
