use crate::{
    config::QueryConfig,
    db::{
        aggregate::aggregate,
        executor::paginate,
        order::apply_order,
        predicate::{FilterProgram, filter},
        query::{QueryError, QueryParams, validate},
        response::{Pagination, QueryResponse},
    },
    error::InternalError,
    model::building::Building,
    obs::sink::{MetricsEvent, MetricsSink, record, with_metrics_sink},
    traits::RecordSource,
};

///
/// QueryEngine
///
/// Query entrypoint bound to a record source, a configuration, and an
/// optional metrics sink. Holds no per-query state; one engine may serve any
/// number of concurrent calls.
///

pub struct QueryEngine<S: RecordSource> {
    source: S,
    config: QueryConfig,
    metrics: Option<&'static dyn MetricsSink>,
}

impl<S: RecordSource> QueryEngine<S> {
    #[must_use]
    pub fn new(source: S) -> Self {
        Self {
            source,
            config: QueryConfig::default(),
            metrics: None,
        }
    }

    /// Replace the configuration; callers validate it when loading.
    #[must_use]
    pub fn with_config(mut self, config: QueryConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub const fn metrics_sink(mut self, sink: &'static dyn MetricsSink) -> Self {
        self.metrics = Some(sink);
        self
    }

    #[must_use]
    pub const fn config(&self) -> &QueryConfig {
        &self.config
    }

    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Run one query against a fresh snapshot of the source.
    pub fn execute(&self, params: &QueryParams) -> Result<QueryResponse, QueryError> {
        let snapshot = self.source.snapshot();

        self.with_metrics(|| run_query(&snapshot, params, &self.config))
    }

    fn with_metrics<T>(&self, f: impl FnOnce() -> T) -> T {
        if let Some(sink) = self.metrics {
            with_metrics_sink(sink, f)
        } else {
            f()
        }
    }
}

/// Run the fixed pipeline over one immutable record set:
/// validate, filter, aggregate, order, paginate.
///
/// Aggregations and the total count describe the whole filtered set, never
/// just the returned page.
pub fn run_query(
    records: &[Building],
    params: &QueryParams,
    config: &QueryConfig,
) -> Result<QueryResponse, QueryError> {
    let span = tracing::info_span!("query", sort = params.sort.as_deref().unwrap_or("id"));
    let _enter = span.enter();

    record(MetricsEvent::QueryStart);

    let query = validate(params, config).map_err(|err| {
        tracing::debug!(error = %err, "query rejected");
        record(MetricsEvent::QueryRejected);
        err
    })?;

    let scale = &config.rating_scale;
    let program = FilterProgram::compile(&query, scale);
    let mut matched = filter(records, &program);
    record(MetricsEvent::RowsScanned {
        rows: count(records.len())?,
    });
    record(MetricsEvent::RowsMatched {
        rows: count(matched.len())?,
    });

    let aggregations = aggregate(matched.iter().copied());
    let total_count = count(matched.len())?;

    apply_order(&mut matched, query.sort, scale);

    let page = paginate(
        &matched,
        query.cursor.as_deref(),
        query.page_size,
        query.sort,
        scale,
    )?;
    record(MetricsEvent::PageEmitted {
        rows: count(page.rows.len())?,
        has_more: page.has_more(),
    });

    tracing::trace!(
        scanned = records.len(),
        matched = total_count,
        returned = page.rows.len(),
        "query complete"
    );

    Ok(QueryResponse {
        data: page.rows.into_iter().cloned().collect(),
        pagination: Pagination {
            next_cursor: page.next_cursor,
            total_count,
        },
        aggregations,
    })
}

fn count(len: usize) -> Result<u64, InternalError> {
    u64::try_from(len).map_err(|_| InternalError::query_invariant("row count exceeds u64"))
}

///
/// TESTS
///
