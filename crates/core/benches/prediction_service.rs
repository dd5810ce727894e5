use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use langsight_core::identify::ports::LanguageModel;
use langsight_core::PredictionService;
use langsight_domain::Result as DomainResult;

fn sample_text() -> String {
    "Questo è un esempio di testo per la previsione della lingua.".repeat(4)
}

struct StubModel {
    label: String,
    distribution: Option<HashMap<String, f64>>,
}

impl StubModel {
    fn label_only(label: &str) -> Self {
        Self { label: label.to_string(), distribution: None }
    }

    fn with_distribution(label: &str, distribution: HashMap<String, f64>) -> Self {
        Self { label: label.to_string(), distribution: Some(distribution) }
    }
}

#[async_trait]
impl LanguageModel for StubModel {
    async fn predict_label(&self, text: &str) -> DomainResult<String> {
        black_box(text);
        Ok(self.label.clone())
    }

    async fn predict_distribution(&self, text: &str) -> DomainResult<HashMap<String, f64>> {
        black_box(text);
        Ok(self.distribution.clone().unwrap_or_default())
    }

    fn supports_distribution(&self) -> bool {
        self.distribution.is_some()
    }

    fn is_loaded(&self) -> bool {
        true
    }
}

fn predict_benchmark(c: &mut Criterion) {
    let text = sample_text();

    let mut group = c.benchmark_group("prediction_service");
    group.sample_size(20).measurement_time(std::time::Duration::from_secs(10));

    group.bench_function("predict_label_only", |b| {
        let runtime = tokio::runtime::Runtime::new().expect("runtime");
        let service = Arc::new(PredictionService::new(Arc::new(StubModel::label_only("IT"))));
        let text = text.clone();

        b.iter(|| {
            let service = Arc::clone(&service);
            let input = text.clone();
            runtime.block_on(async move {
                service.predict(&input).await.unwrap();
            });
        });
    });

    group.bench_function("predict_with_distribution", |b| {
        let runtime = tokio::runtime::Runtime::new().expect("runtime");
        let distribution = HashMap::from([
            ("IT".to_string(), 0.93),
            ("ES".to_string(), 0.04),
            ("FR".to_string(), 0.02),
            ("EN".to_string(), 0.01),
        ]);
        let service = Arc::new(PredictionService::new(Arc::new(StubModel::with_distribution(
            "IT",
            distribution,
        ))));
        let text = text.clone();

        b.iter(|| {
            let service = Arc::clone(&service);
            let input = text.clone();
            runtime.block_on(async move {
                service.predict(&input).await.unwrap();
            });
        });
    });

    group.finish();
}

criterion_group!(core_benchmarks, predict_benchmark);
criterion_main!(core_benchmarks);
