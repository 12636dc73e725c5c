use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// 接收日誌行的回呼，可為同步或非同步
#[derive(Clone)]
pub struct LogSink(Arc<dyn Fn(String) -> BoxFuture<'static, ()> + Send + Sync>);

impl LogSink {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        LogSink(Arc::new(move |line| -> BoxFuture<'static, ()> {
            f(line);
            Box::pin(std::future::ready(()))
        }))
    }

    pub fn new_async<F, Fut>(f: F) -> Self
    where
        F: Fn(String) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        LogSink(Arc::new(move |line| -> BoxFuture<'static, ()> { Box::pin(f(line)) }))
    }

    /// 送出一行並等待回呼處理完畢
    pub async fn emit(&self, line: String) {
        (self.0)(line).await
    }
}

/// 接收 (已完成數, 總數) 的進度回呼
#[derive(Clone)]
pub struct ProgressSink(Arc<dyn Fn(usize, usize) -> BoxFuture<'static, ()> + Send + Sync>);

impl ProgressSink {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(usize, usize) + Send + Sync + 'static,
    {
        ProgressSink(Arc::new(move |completed, total| -> BoxFuture<'static, ()> {
            f(completed, total);
            Box::pin(std::future::ready(()))
        }))
    }

    pub fn new_async<F, Fut>(f: F) -> Self
    where
        F: Fn(usize, usize) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        ProgressSink(Arc::new(move |completed, total| -> BoxFuture<'static, ()> {
            Box::pin(f(completed, total))
        }))
    }

    pub async fn emit(&self, completed: usize, total: usize) {
        (self.0)(completed, total).await
    }
}
