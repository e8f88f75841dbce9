//! `OrderDesk`: the two trigger entry points over both pipelines.
//!
//! The desk owns the shared [`PipelineState`] and hands it to each pipeline.
//! Triggers run their whole chain synchronously; dispatch failures are logged
//! here and returned to the caller.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::PipelineConfig;
use crate::error::{PipelineResult, error_chain};
use crate::order::{OrderOutcome, OrderPipeline};
use crate::request::{OrderRequest, ShipmentRequest};
use crate::shipment::{ShipmentOutcome, ShipmentPipeline};
use crate::sink::OutputSink;
use crate::state::PipelineState;

pub struct OrderDesk {
    state: Arc<PipelineState>,
    catalog: Catalog,
    orders: OrderPipeline,
    shipments: ShipmentPipeline,
}

impl OrderDesk {
    /// Desk with the default configuration (seeded catalog, summary after status).
    pub fn new(sink: Arc<dyn OutputSink>) -> PipelineResult<Self> {
        Self::with_config(sink, &PipelineConfig::default())
    }

    pub fn with_config(
        sink: Arc<dyn OutputSink>,
        config: &PipelineConfig,
    ) -> PipelineResult<Self> {
        let state = Arc::new(PipelineState::new());
        let catalog = config.catalog()?;
        let orders =
            OrderPipeline::new(Arc::clone(&state), Arc::clone(&sink), config.summary_first)?;
        let shipments = ShipmentPipeline::new(Arc::clone(&state), sink)?;

        Ok(Self {
            state,
            catalog,
            orders,
            shipments,
        })
    }

    /// Intake trigger: submit one order and run validation to completion.
    pub fn submit_order(
        &self,
        customer_name: &str,
        product: &str,
        quantity: i64,
    ) -> PipelineResult<OrderOutcome> {
        let request = OrderRequest::new(customer_name, product, quantity);
        let span = tracing::info_span!("submit_order", order_id = %request.id());
        let _guard = span.enter();

        if !self.catalog.contains(request.product()) {
            tracing::debug!(product = request.product(), "product not in catalog");
        }

        self.orders.submit(&request).inspect_err(|err| {
            tracing::error!(error = %error_chain(err), "order dispatch failed");
        })
    }

    /// Ship trigger: gated on the last order being confirmed.
    pub fn request_shipment(
        &self,
        product: &str,
        express: bool,
    ) -> PipelineResult<ShipmentOutcome> {
        let request = ShipmentRequest::new(product, express);
        let span = tracing::info_span!("request_shipment", shipment_id = %request.id(), express);
        let _guard = span.enter();

        self.shipments.request(&request).inspect_err(|err| {
            tracing::error!(error = %error_chain(err), "shipment dispatch failed");
        })
    }

    pub fn last_order_confirmed(&self) -> bool {
        self.state.last_order_confirmed()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn orders(&self) -> &OrderPipeline {
        &self.orders
    }

    pub fn shipments(&self) -> &ShipmentPipeline {
        &self.shipments
    }
}

impl core::fmt::Debug for OrderDesk {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("OrderDesk")
            .field("state", &self.state)
            .field("catalog", &self.catalog)
            .field("orders", &self.orders)
            .field("shipments", &self.shipments)
            .finish()
    }
}
