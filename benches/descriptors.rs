//! Benchmarks for descriptor population and merging.
//!
//! Measures the three steps an application deployment goes through:
//! - Parsing a deployment descriptor into an element tree
//! - Populating bean descriptors from reflection data and from XML
//! - Building a registry and overlaying the deployment descriptor

extern crate beanscope;

use beanscope::prelude::*;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

const SESSION_XML: &str = include_str!("../tests/samples/dd-statelesssessionbean.xml");
const EPB_XML: &str = include_str!("../tests/samples/epb.xml");

/// A stateless bean with one reference of each flavour and a lifecycle callback.
fn annotated_class(index: usize) -> ReflectionClass {
    ReflectionClass::new(&format!("Example\\Services\\Processor{index}"))
        .with_annotation(Annotation::new("Stateless"))
        .with_property(
            ReflectionProperty::new("userProcessor")
                .with_annotation(Annotation::new("EnterpriseBean")),
        )
        .with_property(
            ReflectionProperty::new("entityManager").with_annotation(
                Annotation::new("PersistenceUnit").with_value("unitName", "ExampleEntityManager"),
            ),
        )
        .with_method(
            ReflectionMethod::new("injectApplication")
                .with_annotation(Annotation::new("Resource").with_value("type", "Application")),
        )
        .with_method(
            ReflectionMethod::new("initialize").with_annotation(Annotation::new("PostConstruct")),
        )
}

/// Benchmark parsing a session bean deployment descriptor.
fn bench_parse_session(c: &mut Criterion) {
    c.bench_function("parse_session_xml", |b| {
        b.iter(|| {
            let root = Element::parse(black_box(SESSION_XML)).unwrap();
            black_box(root)
        });
    });
}

/// Benchmark populating a session bean from an already parsed node.
fn bench_session_from_deployment_descriptor(c: &mut Criterion) {
    let root = Element::parse(SESSION_XML).unwrap();

    c.bench_function("session_from_deployment_descriptor", |b| {
        b.iter(|| {
            let mut descriptor = SessionBeanDescriptor::stateless();
            descriptor.from_deployment_descriptor(black_box(&root));
            black_box(descriptor)
        });
    });
}

/// Benchmark populating a session bean from reflection data.
fn bench_session_from_reflection_class(c: &mut Criterion) {
    let class = annotated_class(0);

    c.bench_function("session_from_reflection_class", |b| {
        b.iter(|| {
            let mut descriptor = SessionBeanDescriptor::stateless();
            descriptor.from_reflection_class(black_box(&class));
            black_box(descriptor)
        });
    });
}

/// Benchmark probing every bean kind for a class.
fn bench_any_from_reflection_class(c: &mut Criterion) {
    let class = ReflectionClass::new("Example\\MessageBeans\\ImportReceiver")
        .with_annotation(Annotation::new("MessageDriven"));
    let config = DescriptorConfig::default();

    c.bench_function("any_from_reflection_class", |b| {
        b.iter(|| {
            let descriptor = AnyBeanDescriptor::from_reflection_class(black_box(&class), &config);
            black_box(descriptor)
        });
    });
}

/// Benchmark merging an XML overlay into an annotation derived descriptor.
fn bench_merge(c: &mut Criterion) {
    let class = ReflectionClass::new("AppserverIo\\Apps\\Example\\Services\\SchemaProcessor")
        .with_annotation(Annotation::new("Stateless"));
    let mut from_class = SessionBeanDescriptor::stateless();
    from_class.from_reflection_class(&class);

    let mut from_xml = SessionBeanDescriptor::stateless();
    from_xml.from_deployment_descriptor(&Element::parse(SESSION_XML).unwrap());

    c.bench_function("merge_session", |b| {
        b.iter(|| {
            let mut descriptor = from_class.clone();
            descriptor.merge(black_box(&from_xml)).unwrap();
            black_box(descriptor)
        });
    });
}

/// Benchmark building a registry of 100 annotated beans and overlaying a deployment descriptor.
fn bench_registry(c: &mut Criterion) {
    let classes: Vec<ReflectionClass> = (0..100).map(annotated_class).collect();
    let root = Element::parse(EPB_XML).unwrap();

    c.bench_function("registry_100_beans", |b| {
        b.iter(|| {
            let mut registry = DescriptorRegistry::new();
            registry.from_reflection_classes(black_box(&classes)).unwrap();
            registry.from_deployment_descriptor(black_box(&root)).unwrap();
            black_box(registry)
        });
    });
}

criterion_group!(
    benches,
    // Parsing
    bench_parse_session,
    // Population
    bench_session_from_deployment_descriptor,
    bench_session_from_reflection_class,
    bench_any_from_reflection_class,
    // Merging
    bench_merge,
    bench_registry,
);
criterion_main!(benches);
