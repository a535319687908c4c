mod aabb_queries;
mod obb_obb_sat;
