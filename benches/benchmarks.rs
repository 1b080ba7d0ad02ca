use criterion::{Criterion, criterion_group, criterion_main};
use subsurf::{MockKernel, QuadMesh, Trace, refine_to_solid};

fn subdivide_box(c: &mut Criterion) {
    c.bench_function("box_catmull_clark_4_passes", |b| {
        b.iter(|| {
            let mut mesh = QuadMesh::unit_box();
            mesh.subdivide_catmull_clark(4).expect("Subdivision failed");
            assert_eq!(mesh.num_faces(), 1536);
        });
    });
}

fn build_box_solid(c: &mut Criterion) {
    c.bench_function("box_refine_to_solid_3_passes", |b| {
        b.iter(|| {
            let mut mesh = QuadMesh::unit_box();
            let mut kernel = MockKernel::default();
            let report = refine_to_solid(&mut mesh, 3, Trace::Silent, &mut kernel)
                .expect("Refinement failed");
            assert!(report.volume > 0.0);
        });
    });
}

criterion_group!(benches, subdivide_box, build_box_solid);
criterion_main!(benches);
